use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::{AsExpression, FromSqlRow};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use crate::utils::errors::EnumParseError;

macro_rules! string_enum {
    ($name:ident [$($value:ident),+]) => {

            #[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Copy, Clone, AsExpression, FromSqlRow)]
            #[diesel(sql_type = Text)]
            pub enum $name {
                $(
                    $value,
                )*
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                 let s = match self {
                      $(
                        $name::$value => stringify!($value),
                       )*
                    };
                    write!(f, "{}", s)
                }
            }

            impl FromStr for $name {
                type Err = EnumParseError;

                fn from_str(s: &str) -> Result<$name, Self::Err> {
                  match s {
                      $(
                        stringify!($value) => Ok($name::$value),
                       )*
                        _ => Err(EnumParseError {
                            message: "Could not parse value".to_string(),
                            enum_type: stringify!($name).to_string(),
                            value: s.to_string(),
                        })
                    }
                }
            }

            impl ToSql<Text, Pg> for $name {
                fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
                    out.write_all(self.to_string().as_bytes())?;
                    Ok(IsNull::No)
                }
            }

            impl FromSql<Text, Pg> for $name {
                fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
                    let s = std::str::from_utf8(value.as_bytes())?;
                    s.parse::<$name>().map_err(|e| e.to_string().into())
                }
            }
        }
}

string_enum! { EventAction [Created, Updated, Deleted] }
string_enum! { FolderAccess [View, Add, Edit, Delete] }
string_enum! { PastOrUpcoming [Past, Upcoming] }
string_enum! { RegistrantListVisibility [None, ViewerPublic, Members, RegisteredMembersOnly] }
string_enum! { RegistrationStatus [NotRequired, Recommended, Required, RequiredByCloseDate, AdminsContactsOnly, TemporarilyUnavailable, Closed, External] }
string_enum! { RoleName [Viewer, Member, Editor, Admin] }
