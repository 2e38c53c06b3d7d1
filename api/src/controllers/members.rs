use actix_web::web::{Json, Path, Query};
use actix_web::HttpResponse;
use db::models::*;
use uuid::Uuid;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::models::PathParameters;

#[derive(Deserialize)]
pub struct CreateMemberRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub primary_phone: Option<String>,
    pub role_id: Option<Uuid>,
    pub member_type_ids: Vec<Uuid>,
    #[serde(default)]
    pub is_dependent: bool,
    pub parent_member_id: Option<Uuid>,
    pub relationship_type: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(flatten)]
    pub attributes: UserEditableAttributes,
    pub member_type_ids: Option<Vec<Uuid>>,
    pub is_dependent: Option<bool>,
    pub parent_member_id: Option<Uuid>,
    pub relationship_type: Option<String>,
}

#[derive(Serialize)]
pub struct MemberDetails {
    #[serde(flatten)]
    pub user: DisplayUser,
    pub primary_phone: Option<String>,
    pub role: Option<Role>,
    pub member_types: Vec<MemberType>,
    pub parent_member: Option<DisplayUser>,
    pub relationship_type: Option<String>,
    pub dependents: Vec<DisplayUser>,
}

impl MemberDetails {
    fn load(user: User, connection: &Connection) -> Result<MemberDetails, ApiError> {
        let role = user.role(&mut connection.get())?;
        let member_types = user.member_types(&mut connection.get())?;
        let parent_member = match user.parent_member_id {
            Some(parent_member_id) => Some(User::find(parent_member_id, &mut connection.get())?.for_display()),
            None => None,
        };
        let dependents = user
            .dependents(&mut connection.get())?
            .into_iter()
            .map(|dependent| dependent.for_display())
            .collect();

        Ok(MemberDetails {
            primary_phone: user.primary_phone.clone(),
            relationship_type: user.relationship_type.clone(),
            role,
            member_types,
            parent_member,
            dependents,
            user: user.into(),
        })
    }
}

pub async fn index(
    (connection, query, user): (Connection, Query<PagingParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;

    let paging = Paging::new(&query);
    if let Some(ref search_query) = query.query {
        let members: Vec<DisplayUser> = User::search(search_query, paging.limit as i64, &mut connection.get())?
            .into_iter()
            .map(|member| member.for_display())
            .collect();
        let payload_paging = Paging::clone_with_new_total(&paging, members.len() as u64);
        return Ok(HttpResponse::Ok().json(Payload::new(members, payload_paging)));
    }

    let (members, total) = User::index(paging.page as i64, paging.limit as i64, &mut connection.get())?;
    let members: Vec<DisplayUser> = members.into_iter().map(|member| member.for_display()).collect();
    let payload_paging = Paging::clone_with_new_total(&paging, total as u64);
    Ok(HttpResponse::Ok().json(Payload::new(members, payload_paging)))
}

pub async fn show(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let member = User::find(parameters.id, &mut connection.get())?;
    Ok(HttpResponse::Ok().json(MemberDetails::load(member, &connection)?))
}

pub async fn create(
    (connection, create_request, user): (Connection, Json<CreateMemberRequest>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let create_request = create_request.into_inner();

    let mut new_member = User::create(
        &create_request.email,
        &create_request.first_name,
        &create_request.last_name,
        &create_request.password,
    );
    new_member.primary_phone = create_request.primary_phone.clone();
    new_member.role_id = create_request.role_id;
    let member = new_member.commit(&mut connection.get())?;

    member.set_member_types(&create_request.member_type_ids, &mut connection.get())?;

    let member = if create_request.is_dependent {
        member.set_parent(
            create_request.parent_member_id,
            create_request.relationship_type.clone(),
            &mut connection.get(),
        )?
    } else {
        member
    };

    Ok(HttpResponse::Created().json(MemberDetails::load(member, &connection)?))
}

pub async fn update(
    (connection, parameters, update_request, user): (
        Connection,
        Path<PathParameters>,
        Json<UpdateMemberRequest>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let update_request = update_request.into_inner();

    let member = User::find(parameters.id, &mut connection.get())?;
    let member = member.update(&update_request.attributes, &mut connection.get())?;

    if let Some(ref member_type_ids) = update_request.member_type_ids {
        member.set_member_types(member_type_ids, &mut connection.get())?;
    }

    let member = match update_request.is_dependent {
        Some(true) => member.set_parent(
            update_request.parent_member_id,
            update_request.relationship_type.clone(),
            &mut connection.get(),
        )?,
        Some(false) => member.set_parent(None, None, &mut connection.get())?,
        None => member,
    };

    Ok(HttpResponse::Ok().json(MemberDetails::load(member, &connection)?))
}

pub async fn dependents(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let member = User::find(parameters.id, &mut connection.get())?;
    let dependents: Vec<DisplayUser> = member
        .dependents(&mut connection.get())?
        .into_iter()
        .map(|dependent| dependent.for_display())
        .collect();
    Ok(HttpResponse::Ok().json(&dependents))
}

/// Members are deactivated rather than removed so history referencing them
/// stays intact.
pub async fn destroy(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let member = User::find(parameters.id, &mut connection.get())?;
    let member = member.deactivate(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(member.for_display()))
}
