use actix_web::HttpResponse;
use db::models::*;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;

#[derive(Serialize)]
pub struct CurrentUser {
    pub user: DisplayUser,
    pub salutation: Option<String>,
    pub primary_phone: Option<String>,
    pub secondary_phone: Option<String>,
    pub work_phone: Option<String>,
    pub spouse_first_name: Option<String>,
    pub spouse_last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub company: Option<String>,
    pub occupation_title: Option<String>,
    pub vessel_name: Option<String>,
    pub vessel_type: Option<String>,
    pub vessel_loa: Option<f64>,
    pub vessel_beam: Option<f64>,
    pub vessel_draft: Option<f64>,
    pub role: Option<Role>,
    pub permissions: Vec<Permission>,
    pub member_types: Vec<MemberType>,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub password: Option<String>,
    #[serde(flatten)]
    pub profile: ProfileEditableAttributes,
}

fn current_user_response(user: User, connection: &Connection) -> Result<HttpResponse, ApiError> {
    let role = user.role(&mut connection.get())?;
    let permissions = role.as_ref().map(|r| r.permissions()).unwrap_or_else(Vec::new);
    let member_types = user.member_types(&mut connection.get())?;

    let current_user = CurrentUser {
        salutation: user.salutation.clone(),
        primary_phone: user.primary_phone.clone(),
        secondary_phone: user.secondary_phone.clone(),
        work_phone: user.work_phone.clone(),
        spouse_first_name: user.spouse_first_name.clone(),
        spouse_last_name: user.spouse_last_name.clone(),
        address1: user.address1.clone(),
        address2: user.address2.clone(),
        city: user.city.clone(),
        state: user.state.clone(),
        postal_code: user.postal_code.clone(),
        country: user.country.clone(),
        company: user.company.clone(),
        occupation_title: user.occupation_title.clone(),
        vessel_name: user.vessel_name.clone(),
        vessel_type: user.vessel_type.clone(),
        vessel_loa: user.vessel_loa,
        vessel_beam: user.vessel_beam,
        vessel_draft: user.vessel_draft,
        user: user.into(),
        role,
        permissions,
        member_types,
    };
    Ok(HttpResponse::Ok().json(&current_user))
}

pub async fn current_user((connection, auth_user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    current_user_response(auth_user.user, &connection)
}

pub async fn update_current_user(
    (connection, update_request, auth_user): (Connection, actix_web::web::Json<UpdateProfileRequest>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let update_request = update_request.into_inner();
    let mut user = auth_user
        .user
        .update_profile(&update_request.profile, &mut connection.get())?;

    if let Some(ref password) = update_request.password {
        user = user.set_password(password, &mut connection.get())?;
    }

    current_user_response(user, &connection)
}
