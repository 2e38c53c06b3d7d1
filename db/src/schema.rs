table! {
    document_files (id) {
        id -> Uuid,
        folder_id -> Uuid,
        name -> Text,
        stored_path -> Text,
        description -> Text,
        uploaded_by -> Nullable<Uuid>,
        file_size -> Nullable<Int8>,
        mime_type -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    document_folders (id) {
        id -> Uuid,
        name -> Text,
        parent_id -> Nullable<Uuid>,
        description -> Text,
        created_by -> Nullable<Uuid>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    event_action_logs (id) {
        id -> Uuid,
        event_id -> Nullable<Uuid>,
        user_id -> Nullable<Uuid>,
        action -> Text,
        event_title -> Text,
        event_data -> Nullable<Jsonb>,
        ip_address -> Nullable<Text>,
        user_agent -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

table! {
    event_categories (id) {
        id -> Uuid,
        name -> Text,
        description -> Text,
        color -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    event_contacts (id) {
        id -> Uuid,
        event_id -> Uuid,
        member_id -> Uuid,
        is_primary -> Bool,
        responsibilities -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    event_guests (id) {
        id -> Uuid,
        event_registration_id -> Uuid,
        first_name -> Text,
        last_name -> Text,
        email -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    event_registration_fees (id) {
        id -> Uuid,
        event_id -> Uuid,
        member_type_id -> Uuid,
        fee_in_cents -> Int8,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    event_registrations (id) {
        id -> Uuid,
        event_id -> Uuid,
        member_id -> Uuid,
        fee_in_cents -> Int8,
        cancelled -> Bool,
        cancelled_at -> Nullable<Timestamp>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    events (id) {
        id -> Uuid,
        title -> Text,
        short_description -> Text,
        description -> Nullable<Text>,
        category_id -> Nullable<Uuid>,
        start_datetime -> Timestamp,
        end_datetime -> Timestamp,
        registration_status -> Text,
        registration_open_datetime -> Nullable<Timestamp>,
        registrant_list_visibility -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    folder_permissions (id) {
        id -> Uuid,
        folder_id -> Uuid,
        role_id -> Uuid,
        can_view -> Bool,
        can_add -> Bool,
        can_edit -> Bool,
        can_delete -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    member_type_relationships (id) {
        id -> Uuid,
        parent_type_id -> Uuid,
        child_type_id -> Uuid,
        relationship_name -> Text,
        max_children -> Nullable<Int4>,
        is_active -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    member_types (id) {
        id -> Uuid,
        name -> Text,
        description -> Text,
        is_active -> Bool,
        can_be_parent -> Bool,
        can_be_child -> Bool,
        display_order -> Int4,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    roles (id) {
        id -> Uuid,
        name -> Text,
        description -> Text,
        can_view_events -> Bool,
        can_create_events -> Bool,
        can_edit_events -> Bool,
        can_delete_events -> Bool,
        can_manage_categories -> Bool,
        can_manage_users -> Bool,
        can_access_admin -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    user_member_types (id) {
        id -> Uuid,
        user_id -> Uuid,
        member_type_id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    users (id) {
        id -> Uuid,
        email -> Text,
        first_name -> Text,
        last_name -> Text,
        salutation -> Nullable<Text>,
        nickname -> Nullable<Text>,
        primary_phone -> Nullable<Text>,
        secondary_phone -> Nullable<Text>,
        work_phone -> Nullable<Text>,
        spouse_first_name -> Nullable<Text>,
        spouse_last_name -> Nullable<Text>,
        address1 -> Nullable<Text>,
        address2 -> Nullable<Text>,
        city -> Nullable<Text>,
        state -> Nullable<Text>,
        postal_code -> Nullable<Text>,
        country -> Nullable<Text>,
        company -> Nullable<Text>,
        occupation_title -> Nullable<Text>,
        vessel_name -> Nullable<Text>,
        vessel_type -> Nullable<Text>,
        vessel_loa -> Nullable<Float8>,
        vessel_beam -> Nullable<Float8>,
        vessel_draft -> Nullable<Float8>,
        hashed_pw -> Text,
        password_modified_at -> Timestamp,
        role_id -> Nullable<Uuid>,
        parent_member_id -> Nullable<Uuid>,
        relationship_type -> Nullable<Text>,
        is_active -> Bool,
        is_superuser -> Bool,
        last_login -> Nullable<Timestamp>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(document_files -> document_folders (folder_id));
joinable!(event_contacts -> events (event_id));
joinable!(event_contacts -> users (member_id));
joinable!(event_guests -> event_registrations (event_registration_id));
joinable!(event_registration_fees -> events (event_id));
joinable!(event_registration_fees -> member_types (member_type_id));
joinable!(event_registrations -> events (event_id));
joinable!(event_registrations -> users (member_id));
joinable!(events -> event_categories (category_id));
joinable!(folder_permissions -> document_folders (folder_id));
joinable!(folder_permissions -> roles (role_id));
joinable!(user_member_types -> member_types (member_type_id));
joinable!(user_member_types -> users (user_id));
joinable!(users -> roles (role_id));

allow_tables_to_appear_in_same_query!(
    document_files,
    document_folders,
    event_action_logs,
    event_categories,
    event_contacts,
    event_guests,
    event_registration_fees,
    event_registrations,
    events,
    folder_permissions,
    member_type_relationships,
    member_types,
    roles,
    user_member_types,
    users,
);
