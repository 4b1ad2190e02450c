//! Paired vulnerable/fixed contract implementations from the SWC weakness
//! catalog. Each module covers one catalog entry; the vulnerable variant
//! reproduces the weakness faithfully, the fixed variant the accepted
//! remediation. Artifact names match the original contract names so tests
//! read like their upstream counterparts.

pub mod overflow;
pub mod reentrancy;
pub mod safemath;
pub mod unchecked_call;
pub mod visibility;
pub mod withdrawal;

use swc_chain::Registry;

/// Registry with every paired contract of the suite.
pub fn registry() -> Registry {
    let mut registry = Registry::new();

    // SWC-100 Function Default Visibility
    registry.register(
        "HashForEtherVisibilityNotSet",
        visibility::HashForEtherVisibilityNotSet,
    );
    registry.register(
        "HashForEtherVisibilityNotSetFixed",
        visibility::HashForEtherVisibilityNotSetFixed,
    );

    // SWC-101 Integer Overflow and Underflow
    registry.register("TokenSaleChallenge", overflow::TokenSaleChallenge);
    registry.register("TokenSaleChallengeFixed", overflow::TokenSaleChallengeFixed);
    registry.register(
        "IntegerOverflowMappingSym1",
        overflow::IntegerOverflowMappingSym1,
    );
    registry.register(
        "IntegerOverflowMappingSym1Fixed",
        overflow::IntegerOverflowMappingSym1Fixed,
    );
    registry.register("IntegerOverflowMinimal", overflow::IntegerOverflowMinimal);
    registry.register(
        "IntegerOverflowMinimalFixed",
        overflow::IntegerOverflowMinimalFixed,
    );
    registry.register("IntegerOverflowMul", overflow::IntegerOverflowMul);
    registry.register("IntegerOverflowMulFixed", overflow::IntegerOverflowMulFixed);

    // SWC-104 Unchecked Call Return Value
    registry.register("ReturnValue", unchecked_call::ReturnValue);
    registry.register("ReturnValueAttacker", unchecked_call::ReturnValueAttacker);

    // SWC-105 Unprotected Ether Withdrawal
    registry.register("SimpleEtherDrain", withdrawal::SimpleEtherDrain);
    registry.register("SimpleEtherDrainFixed", withdrawal::SimpleEtherDrainFixed);
    registry.register("WalletWrongConstructor", withdrawal::WalletWrongConstructor);
    registry.register(
        "WalletWrongConstructorFixed",
        withdrawal::WalletWrongConstructorFixed,
    );

    // SWC-107 Reentrancy. The attacker payload is the same against both
    // stores; only the store it is aimed at differs.
    registry.register("EtherStore", reentrancy::EtherStore);
    registry.register("EtherStoreAttacker", reentrancy::EtherStoreAttacker);
    registry.register("EtherStoreFixed", reentrancy::EtherStoreFixed);
    registry.register("EtherStoreFixedAttacker", reentrancy::EtherStoreAttacker);

    registry
}
