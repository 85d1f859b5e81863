// src/modules/content/resources/skill.rs
//
// Skill: a named proficiency grouped by free-form category, with the one
// closed enum of the content model (level) and a manual sort rank.

use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter, QueryOrder, Select, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::content::adapter::incoming::web::resource_routes::ResourceApi;
use crate::modules::content::adapter::outgoing::sea_orm_store::ContentMapper;

//
// ──────────────────────────────────────────────────────────
// Level
// ──────────────────────────────────────────────────────────
//

/// Stored as plain text; the closed set is enforced at the API boundary.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "expert")]
    Expert,
}

//
// ──────────────────────────────────────────────────────────
// Table
// ──────────────────────────────────────────────────────────
//

pub mod entity {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    use super::SkillLevel;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "skills")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub category: String,

        #[sea_orm(column_type = "Text")]
        pub name: String,

        pub level: SkillLevel,

        #[sea_orm(column_type = "Text", nullable)]
        pub icon: Option<String>,

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

//
// ──────────────────────────────────────────────────────────
// View
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillView {
    pub id: Uuid,
    pub category: String,
    pub name: String,
    pub level: SkillLevel,
    pub icon: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSkillDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    pub level: Option<SkillLevel>,

    pub icon: Option<String>,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSkillDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    pub level: Option<SkillLevel>,

    pub icon: Option<String>,

    pub order: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Application data
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub category: String,
    pub name: String,
    pub level: SkillLevel,
    pub icon: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSkillData {
    pub category: Option<String>,
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

impl From<CreateSkillDto> for CreateSkillData {
    fn from(dto: CreateSkillDto) -> Self {
        Self {
            category: dto.category,
            name: dto.name,
            // a skill without a stated level reads as mid-level
            level: dto.level.unwrap_or(SkillLevel::Intermediate),
            icon: dto.icon,
            order: dto.order,
        }
    }
}

impl From<UpdateSkillDto> for UpdateSkillData {
    fn from(dto: UpdateSkillDto) -> Self {
        Self {
            category: dto.category,
            name: dto.name,
            level: dto.level,
            icon: dto.icon,
            order: dto.order,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Engine wiring
// ──────────────────────────────────────────────────────────
//

pub struct SkillMapper;

impl ContentMapper for SkillMapper {
    type Entity = entity::Entity;
    type ActiveModel = entity::ActiveModel;
    type View = SkillView;
    type CreateData = CreateSkillData;
    type UpdateData = UpdateSkillData;

    fn ordered(select: Select<entity::Entity>) -> Select<entity::Entity> {
        select.order_by_asc(entity::Column::Order)
    }

    fn insert_model(data: CreateSkillData) -> entity::ActiveModel {
        let now = Utc::now().fixed_offset();
        entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            category: Set(data.category),
            name: Set(data.name),
            level: Set(data.level),
            icon: Set(data.icon),
            order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_update(model: &mut entity::ActiveModel, data: UpdateSkillData) {
        if let Some(category) = data.category {
            model.category = Set(category);
        }
        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(level) = data.level {
            model.level = Set(level);
        }
        if let Some(icon) = data.icon {
            model.icon = Set(Some(icon));
        }
        if let Some(order) = data.order {
            model.order = Set(order);
        }
        model.updated_at = Set(Utc::now().fixed_offset());
    }

    fn to_view(model: entity::Model) -> SkillView {
        SkillView {
            id: model.id,
            category: model.category,
            name: model.name,
            level: model.level,
            icon: model.icon,
            order: model.order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub struct SkillApi;

impl ResourceApi for SkillApi {
    const RESOURCE: &'static str = "skill";
    const PATH: &'static str = "/api/skills";

    type View = SkillView;
    type CreateDto = CreateSkillDto;
    type UpdateDto = UpdateSkillDto;
    type CreateData = CreateSkillData;
    type UpdateData = UpdateSkillData;
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    #[test]
    fn list_query_orders_by_rank_ascending() {
        let sql = SkillMapper::ordered(entity::Entity::find())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.ends_with(r#"ORDER BY "skills"."order" ASC"#),
            "unexpected query: {sql}"
        );
    }

    #[test]
    fn create_defaults_level_to_intermediate() {
        let dto: CreateSkillDto =
            serde_json::from_str(r#"{"category": "frontend", "name": "React"}"#).unwrap();
        let data = CreateSkillData::from(dto);

        assert_eq!(data.level, SkillLevel::Intermediate);
        assert_eq!(data.order, 0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed = serde_json::from_str::<CreateSkillDto>(
            r#"{"category": "frontend", "name": "React", "rank": 3}"#,
        );

        assert!(parsed.is_err());
    }

    #[test]
    fn level_parses_from_lowercase_wire_values() {
        let dto: CreateSkillDto = serde_json::from_str(
            r#"{"category": "frontend", "name": "React", "level": "expert"}"#,
        )
        .unwrap();

        assert_eq!(dto.level, Some(SkillLevel::Expert));
    }

    #[test]
    fn insert_model_stamps_id_and_timestamps() {
        let model = SkillMapper::insert_model(CreateSkillData {
            category: "frontend".to_string(),
            name: "React".to_string(),
            level: SkillLevel::Expert,
            icon: Some("⚛️".to_string()),
            order: 1,
        });

        assert!(model.id.is_set());
        assert!(model.created_at.is_set());
        assert_eq!(model.name.unwrap(), "React");
        assert_eq!(model.order.unwrap(), 1);
    }
}
