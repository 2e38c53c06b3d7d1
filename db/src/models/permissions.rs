use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::str::FromStr;
use crate::utils::errors::EnumParseError;

/// The individual capabilities a role can grant. Check sites ask for one of
/// these rather than inspecting role flags directly.
#[derive(PartialEq, Debug, Copy, Clone, Eq, Ord, PartialOrd)]
pub enum Permission {
    ViewEvents,
    CreateEvents,
    EditEvents,
    DeleteEvents,
    ManageCategories,
    ManageUsers,
    AccessAdmin,
}

impl Serialize for Permission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Permission::ViewEvents => "view_events",
            Permission::CreateEvents => "create_events",
            Permission::EditEvents => "edit_events",
            Permission::DeleteEvents => "delete_events",
            Permission::ManageCategories => "manage_categories",
            Permission::ManageUsers => "manage_users",
            Permission::AccessAdmin => "access_admin",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Permission {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let s = match s {
            "view_events" => Permission::ViewEvents,
            "create_events" => Permission::CreateEvents,
            "edit_events" => Permission::EditEvents,
            "delete_events" => Permission::DeleteEvents,
            "manage_categories" => Permission::ManageCategories,
            "manage_users" => Permission::ManageUsers,
            "access_admin" => Permission::AccessAdmin,
            _ => {
                return Err(EnumParseError {
                    message: "Could not parse value".to_string(),
                    enum_type: "Permission".to_string(),
                    value: s.to_string(),
                })
            }
        };
        Ok(s)
    }
}
