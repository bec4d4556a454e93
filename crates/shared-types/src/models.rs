use serde::{Deserialize, Serialize};
use std::fmt;

/// Help desk user role selected on the login screen.
///
/// - `Agent`: works the ticket queue.
/// - `Customer`: raises support requests.
/// - `Manager`: watches SLA and volume metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Agent,
    Customer,
    Manager,
}

impl Role {
    /// All roles in the order the login selector lists them.
    pub const ALL: [Role; 3] = [Role::Agent, Role::Customer, Role::Manager];

    /// Parse the exact selector label. Matching is case-sensitive and an
    /// empty string means no role was picked.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Agent" => Some(Role::Agent),
            "Customer" => Some(Role::Customer),
            "Manager" => Some(Role::Manager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Agent => "Agent",
            Role::Customer => "Customer",
            Role::Manager => "Manager",
        }
    }

    /// The view a successful login for this role lands on.
    pub fn destination(&self) -> Destination {
        match self {
            Role::Agent => Destination::AgentView,
            Role::Customer => Destination::CustomerView,
            Role::Manager => Destination::ManagerView,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dashboard shown after a successful login. Chosen solely by role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Destination {
    AgentView,
    CustomerView,
    ManagerView,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::AgentView => "/agent",
            Destination::CustomerView => "/customer",
            Destination::ManagerView => "/manager",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Destination::AgentView => "agent view",
            Destination::CustomerView => "customer view",
            Destination::ManagerView => "manager view",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_role() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Role::parse("agent"), None);
        assert_eq!(Role::parse("MANAGER"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn selector_order() {
        assert_eq!(Role::ALL, [Role::Agent, Role::Customer, Role::Manager]);
    }

    #[test]
    fn destinations_follow_role() {
        assert_eq!(Role::Agent.destination(), Destination::AgentView);
        assert_eq!(Role::Customer.destination().path(), "/customer");
        assert_eq!(Role::Manager.destination().label(), "manager view");
    }
}
