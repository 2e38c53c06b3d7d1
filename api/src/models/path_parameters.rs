use uuid::Uuid;

#[derive(Deserialize)]
pub struct PathParameters {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct EventContactPathParameters {
    pub id: Uuid,
    pub contact_id: Uuid,
}

#[derive(Deserialize)]
pub struct EventFeePathParameters {
    pub id: Uuid,
    pub fee_id: Uuid,
}

#[derive(Deserialize)]
pub struct RegistrationGuestPathParameters {
    pub id: Uuid,
    pub guest_id: Uuid,
}

#[derive(Deserialize)]
pub struct FolderPermissionPathParameters {
    pub id: Uuid,
    pub permission_id: Uuid,
}
