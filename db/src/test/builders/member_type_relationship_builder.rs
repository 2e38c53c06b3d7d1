use uuid::Uuid;
use crate::db::Connection;
use crate::models::*;
use crate::test::builders::MemberTypeBuilder;

pub struct MemberTypeRelationshipBuilder<'a> {
    parent_type_id: Option<Uuid>,
    child_type_id: Option<Uuid>,
    relationship_name: String,
    max_children: Option<i32>,
    connection: &'a Connection,
}

impl<'a> MemberTypeRelationshipBuilder<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        MemberTypeRelationshipBuilder {
            parent_type_id: None,
            child_type_id: None,
            relationship_name: "Child".to_string(),
            max_children: None,
            connection,
        }
    }

    pub fn with_parent_type(mut self, parent_type: &MemberType) -> Self {
        self.parent_type_id = Some(parent_type.id);
        self
    }

    pub fn with_child_type(mut self, child_type: &MemberType) -> Self {
        self.child_type_id = Some(child_type.id);
        self
    }

    pub fn with_name(mut self, relationship_name: &str) -> Self {
        self.relationship_name = relationship_name.to_string();
        self
    }

    pub fn with_max_children(mut self, max_children: i32) -> Self {
        self.max_children = Some(max_children);
        self
    }

    pub fn finish(self) -> MemberTypeRelationship {
        let parent_type_id = self.parent_type_id.unwrap_or_else(|| {
            MemberTypeBuilder::new(self.connection).parentable().finish().id
        });
        let child_type_id = self.child_type_id.unwrap_or_else(|| {
            MemberTypeBuilder::new(self.connection).childable().finish().id
        });

        let mut new_relationship =
            MemberTypeRelationship::create(parent_type_id, child_type_id, &self.relationship_name);
        new_relationship.max_children = self.max_children;
        new_relationship.commit(&mut self.connection.get()).unwrap()
    }
}
