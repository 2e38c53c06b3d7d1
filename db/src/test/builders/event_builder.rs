use chrono::Duration;
use chrono::NaiveDateTime;
use chrono::Utc;
use rand::prelude::*;
use uuid::Uuid;
use crate::db::Connection;
use crate::models::*;

pub struct EventBuilder<'a> {
    title: String,
    category_id: Option<Uuid>,
    start_datetime: Option<NaiveDateTime>,
    end_datetime: Option<NaiveDateTime>,
    registration_status: RegistrationStatus,
    registration_open_datetime: Option<NaiveDateTime>,
    registrant_list_visibility: RegistrantListVisibility,
    connection: &'a Connection,
}

impl<'a> EventBuilder<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        let x: u32 = random();
        EventBuilder {
            title: format!("Event {}", x),
            category_id: None,
            start_datetime: None,
            end_datetime: None,
            registration_status: RegistrationStatus::NotRequired,
            registration_open_datetime: None,
            registrant_list_visibility: RegistrantListVisibility::None,
            connection,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_category(mut self, category: &EventCategory) -> Self {
        self.category_id = Some(category.id);
        self
    }

    pub fn with_start(mut self, start_datetime: NaiveDateTime) -> Self {
        self.start_datetime = Some(start_datetime);
        self
    }

    pub fn with_end(mut self, end_datetime: NaiveDateTime) -> Self {
        self.end_datetime = Some(end_datetime);
        self
    }

    pub fn with_registration_status(mut self, registration_status: RegistrationStatus) -> Self {
        self.registration_status = registration_status;
        self
    }

    pub fn with_registration_open(mut self, registration_open_datetime: NaiveDateTime) -> Self {
        self.registration_open_datetime = Some(registration_open_datetime);
        self
    }

    pub fn with_registrant_list_visibility(mut self, visibility: RegistrantListVisibility) -> Self {
        self.registrant_list_visibility = visibility;
        self
    }

    /// An event next week that takes registrations.
    pub fn registerable(mut self) -> Self {
        self.registration_status = RegistrationStatus::Required;
        self
    }

    pub fn in_the_past(mut self) -> Self {
        let now = Utc::now().naive_utc();
        self.start_datetime = Some(now - Duration::days(8));
        self.end_datetime = Some(now - Duration::days(7));
        self
    }

    pub fn finish(self) -> Event {
        let now = Utc::now().naive_utc();
        let start_datetime = self.start_datetime.unwrap_or(now + Duration::days(7));
        let end_datetime = self.end_datetime.unwrap_or(start_datetime + Duration::hours(4));

        let mut new_event = Event::create(&self.title, "A club gathering", start_datetime, end_datetime);
        new_event.category_id = self.category_id;
        new_event.registration_status = self.registration_status;
        new_event.registration_open_datetime = self.registration_open_datetime;
        new_event.registrant_list_visibility = self.registrant_list_visibility;
        new_event.commit(&mut self.connection.get()).unwrap()
    }
}
