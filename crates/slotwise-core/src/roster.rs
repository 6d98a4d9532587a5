//! Member directory -- named groups of users and bookable resources.
//!
//! A roster is the deployment-specific list of people and meeting rooms the
//! enclosing application lets the user pick from. It is plain data loaded
//! from JSON; the scheduler itself only ever sees the expanded email lists.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether a directory entry is a person or a bookable resource (meeting
/// room, shared equipment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    #[default]
    User,
    Resource,
}

/// One directory entry. `kind` defaults to `user` when omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub kind: MemberKind,
}

/// A named selection of members, e.g. a team or the set of meeting rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub members: Vec<Member>,
}

impl Group {
    /// Emails of every member, in declaration order -- the attendee list a
    /// free-time search over this group uses.
    pub fn attendee_emails(&self) -> Vec<String> {
        self.members.iter().map(|m| m.email.clone()).collect()
    }
}

/// The full member directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Roster {
    pub groups: Vec<Group>,
}

impl Roster {
    /// Parse a roster from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRoster`](crate::ScheduleError) when
    /// the input is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a group by its id.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Look up a member by email, searching groups in order.
    pub fn member(&self, email: &str) -> Option<&Member> {
        self.groups
            .iter()
            .flat_map(|g| g.members.iter())
            .find(|m| m.email == email)
    }
}
