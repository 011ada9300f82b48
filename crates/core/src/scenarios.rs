//! Canned user scenarios.
//!
//! A scenario is a named persona used to simulate different user states
//! without real authentication. The picker page renders one button per
//! scenario; the chosen name flows through the authorize step unchanged and
//! becomes the `user_id` on the persisted binding.

use crate::oidc::DEFAULT_SCENARIO;

/// A simulated user persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
}

/// The personas this stub can simulate. The default persona comes first.
pub const USER_SCENARIOS: &[Scenario] = &[
    Scenario {
        name: DEFAULT_SCENARIO,
        description: "Plain user with nothing notable on the account",
    },
    Scenario {
        name: "happy-path",
        description: "Fully registered operator with a licence in good standing",
    },
    Scenario {
        name: "new-user",
        description: "First sign-in, no licence records yet",
    },
    Scenario {
        name: "pending-application",
        description: "Licence application submitted and awaiting a decision",
    },
    Scenario {
        name: "suspended-licence",
        description: "Operator whose licence is currently suspended",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_scenario_is_listed_first() {
        assert_eq!(USER_SCENARIOS[0].name, DEFAULT_SCENARIO);
    }

    #[test]
    fn scenario_names_are_unique() {
        let names: HashSet<_> = USER_SCENARIOS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), USER_SCENARIOS.len());
    }
}
