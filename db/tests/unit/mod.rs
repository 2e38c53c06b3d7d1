mod document_folders;
mod event_action_logs;
mod event_contacts;
mod event_registrations;
mod folder_permissions;
mod member_type_relationships;
mod roles;
