// src/modules/content/resources/reference.rs
//
// Reference: a professional testimonial. Contact details are all optional —
// the person may prefer not to be reachable through the public page.

use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Select, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::content::adapter::incoming::web::resource_routes::ResourceApi;
use crate::modules::content::adapter::outgoing::sea_orm_store::ContentMapper;

pub mod entity {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "references")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub name: String,

        #[sea_orm(column_type = "Text")]
        pub position: String,

        #[sea_orm(column_type = "Text")]
        pub company: String,

        #[sea_orm(column_type = "Text")]
        pub relationship: String,

        #[sea_orm(column_type = "Text")]
        pub testimonial: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub email: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub phone: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub linkedin: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub avatar: Option<String>,

        pub order: i32,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReferenceView {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub company: String,
    pub relationship: String,
    pub testimonial: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub avatar: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateReferenceDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub position: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub company: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub relationship: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub testimonial: String,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub linkedin: Option<String>,

    pub avatar: Option<String>,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateReferenceDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub position: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub company: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub relationship: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub testimonial: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub linkedin: Option<String>,

    pub avatar: Option<String>,

    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateReferenceData {
    pub name: String,
    pub position: String,
    pub company: String,
    pub relationship: String,
    pub testimonial: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub avatar: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReferenceData {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub relationship: Option<String>,
    pub testimonial: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub avatar: Option<String>,
    pub order: Option<i32>,
}

impl From<CreateReferenceDto> for CreateReferenceData {
    fn from(dto: CreateReferenceDto) -> Self {
        Self {
            name: dto.name,
            position: dto.position,
            company: dto.company,
            relationship: dto.relationship,
            testimonial: dto.testimonial,
            email: dto.email,
            phone: dto.phone,
            linkedin: dto.linkedin,
            avatar: dto.avatar,
            order: dto.order,
        }
    }
}

impl From<UpdateReferenceDto> for UpdateReferenceData {
    fn from(dto: UpdateReferenceDto) -> Self {
        Self {
            name: dto.name,
            position: dto.position,
            company: dto.company,
            relationship: dto.relationship,
            testimonial: dto.testimonial,
            email: dto.email,
            phone: dto.phone,
            linkedin: dto.linkedin,
            avatar: dto.avatar,
            order: dto.order,
        }
    }
}

pub struct ReferenceMapper;

impl ContentMapper for ReferenceMapper {
    type Entity = entity::Entity;
    type ActiveModel = entity::ActiveModel;
    type View = ReferenceView;
    type CreateData = CreateReferenceData;
    type UpdateData = UpdateReferenceData;

    fn ordered(select: Select<entity::Entity>) -> Select<entity::Entity> {
        select.order_by_asc(entity::Column::Order)
    }

    fn insert_model(data: CreateReferenceData) -> entity::ActiveModel {
        let now = Utc::now().fixed_offset();
        entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            position: Set(data.position),
            company: Set(data.company),
            relationship: Set(data.relationship),
            testimonial: Set(data.testimonial),
            email: Set(data.email),
            phone: Set(data.phone),
            linkedin: Set(data.linkedin),
            avatar: Set(data.avatar),
            order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_update(model: &mut entity::ActiveModel, data: UpdateReferenceData) {
        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(position) = data.position {
            model.position = Set(position);
        }
        if let Some(company) = data.company {
            model.company = Set(company);
        }
        if let Some(relationship) = data.relationship {
            model.relationship = Set(relationship);
        }
        if let Some(testimonial) = data.testimonial {
            model.testimonial = Set(testimonial);
        }
        if let Some(email) = data.email {
            model.email = Set(Some(email));
        }
        if let Some(phone) = data.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(linkedin) = data.linkedin {
            model.linkedin = Set(Some(linkedin));
        }
        if let Some(avatar) = data.avatar {
            model.avatar = Set(Some(avatar));
        }
        if let Some(order) = data.order {
            model.order = Set(order);
        }
        model.updated_at = Set(Utc::now().fixed_offset());
    }

    fn to_view(model: entity::Model) -> ReferenceView {
        ReferenceView {
            id: model.id,
            name: model.name,
            position: model.position,
            company: model.company,
            relationship: model.relationship,
            testimonial: model.testimonial,
            email: model.email,
            phone: model.phone,
            linkedin: model.linkedin,
            avatar: model.avatar,
            order: model.order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub struct ReferenceApi;

impl ResourceApi for ReferenceApi {
    const RESOURCE: &'static str = "reference";
    const PATH: &'static str = "/api/references";

    type View = ReferenceView;
    type CreateDto = CreateReferenceDto;
    type UpdateDto = UpdateReferenceDto;
    type CreateData = CreateReferenceData;
    type UpdateData = UpdateReferenceData;
}
