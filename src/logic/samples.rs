//! Sample Contracts
//!
//! The fixture library the dashboard offers for one-click analysis runs:
//! a handful of deliberately vulnerable contracts and functions plus safe
//! counterparts, reproduced as a plain lookup table.

use once_cell::sync::Lazy;

use crate::logic::analyzer::AnalysisMode;

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub code: &'static str,
}

pub static SAMPLE_CONTRACTS: Lazy<Vec<Sample>> = Lazy::new(|| {
    vec![
        Sample {
            name: "Vulnerable Bank",
            code: r#"pragma solidity ^0.8.0;

contract VulnerableBank {
    mapping(address => uint) public balances;

    function deposit() public payable {
        balances[msg.sender] += msg.value;
    }

    function withdraw(uint amount) public {
        require(balances[msg.sender] >= amount, "Insufficient balance");

        // Vulnerable to reentrancy attack
        (bool success, ) = msg.sender.call{value: amount}("");
        require(success, "Transfer failed");

        balances[msg.sender] -= amount;
    }

    function getBalance() public view returns (uint) {
        return balances[msg.sender];
    }
}"#,
        },
        Sample {
            name: "Timestamp Dependency",
            code: r#"pragma solidity ^0.8.0;

contract TimestampDependency {
    uint public lastAction;
    mapping(address => bool) public hasActed;

    function performAction() public {
        // Vulnerable: depends on block.timestamp
        require(block.timestamp > lastAction + 10, "Too soon");
        require(!hasActed[msg.sender], "Already acted");

        hasActed[msg.sender] = true;
        lastAction = block.timestamp;

        payable(msg.sender).transfer(1 ether);
    }
}"#,
        },
        Sample {
            name: "Unchecked Send",
            code: r#"pragma solidity ^0.8.0;

contract UncheckedSend {
    mapping(address => uint) public balances;

    function deposit() public payable {
        balances[msg.sender] += msg.value;
    }

    function withdraw(uint amount) public {
        require(balances[msg.sender] >= amount, "Insufficient balance");

        balances[msg.sender] -= amount;

        // Vulnerable: not checking return value
        payable(msg.sender).send(amount);
    }
}"#,
        },
        Sample {
            name: "Safe Contract",
            code: r#"pragma solidity ^0.8.0;

import "@openzeppelin/contracts/security/ReentrancyGuard.sol";
import "@openzeppelin/contracts/access/Ownable.sol";

contract SafeContract is ReentrancyGuard, Ownable {
    mapping(address => uint) public balances;

    event Deposit(address indexed user, uint amount);
    event Withdrawal(address indexed user, uint amount);

    function deposit() public payable {
        require(msg.value > 0, "Must deposit positive amount");
        balances[msg.sender] += msg.value;
        emit Deposit(msg.sender, msg.value);
    }

    function withdraw(uint amount) public nonReentrant {
        require(amount > 0, "Must withdraw positive amount");
        require(balances[msg.sender] >= amount, "Insufficient balance");

        balances[msg.sender] -= amount;

        (bool success, ) = payable(msg.sender).call{value: amount}("");
        require(success, "Transfer failed");

        emit Withdrawal(msg.sender, amount);
    }

    function getBalance() public view returns (uint) {
        return balances[msg.sender];
    }
}"#,
        },
    ]
});

pub static SAMPLE_FUNCTIONS: Lazy<Vec<Sample>> = Lazy::new(|| {
    vec![
        Sample {
            name: "Reentrancy Vulnerable",
            code: r#"function withdraw(uint amount) public {
    require(balances[msg.sender] >= amount, "Insufficient balance");

    // Vulnerable: external call before state change
    (bool success, ) = msg.sender.call{value: amount}("");
    require(success, "Transfer failed");

    balances[msg.sender] -= amount;
}"#,
        },
        Sample {
            name: "Timestamp Dependency",
            code: r#"function claimReward() public {
    require(block.timestamp > lastClaim[msg.sender] + 1 days, "Too soon");
    require(!hasClaimed[msg.sender], "Already claimed");

    hasClaimed[msg.sender] = true;
    lastClaim[msg.sender] = block.timestamp;

    payable(msg.sender).transfer(rewardAmount);
}"#,
        },
        Sample {
            name: "Unchecked Send",
            code: r#"function sendPayment(address recipient, uint amount) public {
    require(balances[msg.sender] >= amount, "Insufficient balance");

    balances[msg.sender] -= amount;

    // Vulnerable: not checking return value
    payable(recipient).send(amount);
}"#,
        },
        Sample {
            name: "tx.origin Usage",
            code: r#"function authorize(address target) public {
    // Vulnerable: using tx.origin instead of msg.sender
    require(tx.origin == owner, "Not authorized");

    authorized[target] = true;
}"#,
        },
        Sample {
            name: "Integer Overflow",
            code: r#"function add(uint a, uint b) public pure returns (uint) {
    // Vulnerable in older Solidity versions without SafeMath
    return a + b; // Can overflow
}"#,
        },
        Sample {
            name: "Safe Function",
            code: r#"function safeWithdraw(uint amount) public nonReentrant {
    require(amount > 0, "Must withdraw positive amount");
    require(balances[msg.sender] >= amount, "Insufficient balance");

    balances[msg.sender] -= amount;

    (bool success, ) = payable(msg.sender).call{value: amount}("");
    require(success, "Transfer failed");
}"#,
        },
    ]
});

/// Samples applicable to the given analysis mode
pub fn for_mode(mode: AnalysisMode) -> &'static [Sample] {
    match mode {
        AnalysisMode::Contract => &SAMPLE_CONTRACTS,
        AnalysisMode::Function => &SAMPLE_FUNCTIONS,
    }
}

/// Case-insensitive lookup by sample name
pub fn find(mode: AnalysisMode, name: &str) -> Option<&'static Sample> {
    for_mode(mode).iter().find(|sample| sample.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_modes_have_samples() {
        assert_eq!(for_mode(AnalysisMode::Contract).len(), 4);
        assert_eq!(for_mode(AnalysisMode::Function).len(), 6);
    }

    #[test]
    fn lookup_is_case_insensitive_and_mode_scoped() {
        let sample = find(AnalysisMode::Contract, "vulnerable bank").expect("known sample");
        assert!(sample.code.contains("contract VulnerableBank"));

        // "Integer Overflow" only exists as a function sample.
        assert!(find(AnalysisMode::Contract, "Integer Overflow").is_none());
        assert!(find(AnalysisMode::Function, "Integer Overflow").is_some());
    }

    #[test]
    fn sample_code_is_never_blank() {
        for sample in for_mode(AnalysisMode::Contract).iter().chain(for_mode(AnalysisMode::Function)) {
            assert!(!sample.code.trim().is_empty(), "{} has no code", sample.name);
        }
    }
}
