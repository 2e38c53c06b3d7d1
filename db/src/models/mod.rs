pub use self::document_files::*;
pub use self::document_folders::*;
pub use self::enums::*;
pub use self::event_action_logs::*;
pub use self::event_categories::*;
pub use self::event_contacts::*;
pub use self::event_guests::*;
pub use self::event_registration_fees::*;
pub use self::event_registrations::*;
pub use self::events::*;
pub use self::folder_permissions::*;
pub use self::member_type_relationships::*;
pub use self::member_types::*;
pub use self::paging::*;
pub use self::permissions::*;
pub use self::roles::*;
pub use self::users::*;

pub mod document_files;
pub mod document_folders;
pub mod enums;
pub mod event_action_logs;
pub mod event_categories;
pub mod event_contacts;
pub mod event_guests;
pub mod event_registration_fees;
pub mod event_registrations;
pub mod events;
pub mod folder_permissions;
pub mod member_type_relationships;
pub mod member_types;
pub mod paging;
pub mod permissions;
pub mod roles;
pub mod users;
