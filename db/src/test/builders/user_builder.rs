use rand::prelude::*;
use uuid::Uuid;
use crate::db::Connection;
use crate::models::*;

pub struct UserBuilder<'a> {
    email: String,
    first_name: String,
    last_name: String,
    password: String,
    role_id: Option<Uuid>,
    member_type_ids: Vec<Uuid>,
    connection: &'a Connection,
}

impl<'a> UserBuilder<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        let x: u32 = random();
        UserBuilder {
            email: format!("member{}@example.com", x),
            first_name: "Jeff".to_string(),
            last_name: format!("Wilson{}", x),
            password: "examplePassword8".to_string(),
            role_id: None,
            member_type_ids: Vec::new(),
            connection,
        }
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = email;
        self
    }

    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = last_name.to_string();
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    pub fn with_role(mut self, role: &Role) -> Self {
        self.role_id = Some(role.id);
        self
    }

    pub fn with_member_type(mut self, member_type: &MemberType) -> Self {
        self.member_type_ids.push(member_type.id);
        self
    }

    pub fn finish(self) -> User {
        let mut new_user = User::create(&self.email, &self.first_name, &self.last_name, &self.password);
        new_user.role_id = self.role_id;
        let user = new_user.commit(&mut self.connection.get()).unwrap();
        if !self.member_type_ids.is_empty() {
            user.set_member_types(&self.member_type_ids, &mut self.connection.get())
                .unwrap();
        }
        user
    }
}
