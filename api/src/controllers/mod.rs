pub mod auth;
pub mod event_categories;
pub mod event_contacts;
pub mod event_guests;
pub mod event_registration_fees;
pub mod event_registrations;
pub mod events;
pub mod files;
pub mod folder_permissions;
pub mod folders;
pub mod member_type_relationships;
pub mod member_types;
pub mod members;
pub mod roles;
pub mod users;
