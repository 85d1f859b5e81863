// src/modules/content/resources/experience.rs
//
// Experience: one employment entry on the timeline. A current position
// carries no end date; the rule is enforced on both create and update.
// Retrieval order is newest rank first, matching how the timeline renders.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, QueryOrder, Select, Set};
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
    #[sea_orm(table_name = "experiences")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub company: String,

        #[sea_orm(column_type = "Text")]
        pub position: String,

        pub start_date: Date,

        #[sea_orm(nullable)]
        pub end_date: Option<Date>,

        pub current: bool,

        #[sea_orm(column_type = "Text")]
        pub description: String,

        #[sea_orm(column_type = "JsonBinary")]
        pub achievements: Vec<String>,

        #[sea_orm(column_type = "JsonBinary")]
        pub challenges: Vec<String>,

        #[sea_orm(column_type = "JsonBinary")]
        pub learnings: Vec<String>,

        #[sea_orm(column_type = "JsonBinary")]
        pub technologies: Vec<String>,

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
pub struct ExperienceView {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub challenges: Vec<String>,
    pub learnings: Vec<String>,
    pub technologies: Vec<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateExperienceDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub position: String,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,

    #[serde(default)]
    pub achievements: Vec<String>,

    #[serde(default)]
    pub challenges: Vec<String>,

    #[serde(default)]
    pub learnings: Vec<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateExperienceDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub position: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    pub current: Option<bool>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,

    pub achievements: Option<Vec<String>>,

    pub challenges: Option<Vec<String>>,

    pub learnings: Option<Vec<String>>,

    pub technologies: Option<Vec<String>>,

    pub order: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateExperienceData {
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub challenges: Vec<String>,
    pub learnings: Vec<String>,
    pub technologies: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExperienceData {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub challenges: Option<Vec<String>>,
    pub learnings: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl From<CreateExperienceDto> for CreateExperienceData {
    fn from(dto: CreateExperienceDto) -> Self {
        Self {
            company: dto.company,
            position: dto.position,
            start_date: dto.start_date,
            // a current position carries no end date
            end_date: if dto.current { None } else { dto.end_date },
            current: dto.current,
            description: dto.description,
            achievements: dto.achievements,
            challenges: dto.challenges,
            learnings: dto.learnings,
            technologies: dto.technologies,
            order: dto.order,
        }
    }
}

impl From<UpdateExperienceDto> for UpdateExperienceData {
    fn from(dto: UpdateExperienceDto) -> Self {
        Self {
            company: dto.company,
            position: dto.position,
            start_date: dto.start_date,
            end_date: dto.end_date,
            current: dto.current,
            description: dto.description,
            achievements: dto.achievements,
            challenges: dto.challenges,
            learnings: dto.learnings,
            technologies: dto.technologies,
            order: dto.order,
        }
    }
}

pub struct ExperienceMapper;

impl ContentMapper for ExperienceMapper {
    type Entity = entity::Entity;
    type ActiveModel = entity::ActiveModel;
    type View = ExperienceView;
    type CreateData = CreateExperienceData;
    type UpdateData = UpdateExperienceData;

    fn ordered(select: Select<entity::Entity>) -> Select<entity::Entity> {
        select.order_by_desc(entity::Column::Order)
    }

    fn insert_model(data: CreateExperienceData) -> entity::ActiveModel {
        let now = Utc::now().fixed_offset();
        entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(data.company),
            position: Set(data.position),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            current: Set(data.current),
            description: Set(data.description),
            achievements: Set(data.achievements),
            challenges: Set(data.challenges),
            learnings: Set(data.learnings),
            technologies: Set(data.technologies),
            order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn apply_update(model: &mut entity::ActiveModel, data: UpdateExperienceData) {
        if let Some(company) = data.company {
            model.company = Set(company);
        }
        if let Some(position) = data.position {
            model.position = Set(position);
        }
        if let Some(start_date) = data.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = data.end_date {
            model.end_date = Set(Some(end_date));
        }
        if let Some(current) = data.current {
            model.current = Set(current);
        }
        if let Some(description) = data.description {
            model.description = Set(description);
        }
        if let Some(achievements) = data.achievements {
            model.achievements = Set(achievements);
        }
        if let Some(challenges) = data.challenges {
            model.challenges = Set(challenges);
        }
        if let Some(learnings) = data.learnings {
            model.learnings = Set(learnings);
        }
        if let Some(technologies) = data.technologies {
            model.technologies = Set(technologies);
        }
        if let Some(order) = data.order {
            model.order = Set(order);
        }

        // the invariant wins over whatever end_date the caller supplied
        let is_current = match &model.current {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => *value,
            ActiveValue::NotSet => false,
        };
        if is_current {
            model.end_date = Set(None);
        }

        model.updated_at = Set(Utc::now().fixed_offset());
    }

    fn to_view(model: entity::Model) -> ExperienceView {
        ExperienceView {
            id: model.id,
            company: model.company,
            position: model.position,
            start_date: model.start_date,
            end_date: model.end_date,
            current: model.current,
            description: model.description,
            achievements: model.achievements,
            challenges: model.challenges,
            learnings: model.learnings,
            technologies: model.technologies,
            order: model.order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub struct ExperienceApi;

impl ResourceApi for ExperienceApi {
    const RESOURCE: &'static str = "experience";
    const PATH: &'static str = "/api/experience";

    type View = ExperienceView;
    type CreateDto = CreateExperienceDto;
    type UpdateDto = UpdateExperienceDto;
    type CreateData = CreateExperienceData;
    type UpdateData = UpdateExperienceData;
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, IntoActiveModel, QueryTrait};

    fn stored_model(current: bool, end_date: Option<NaiveDate>) -> entity::Model {
        let now = Utc::now().fixed_offset();
        entity::Model {
            id: Uuid::new_v4(),
            company: "Tech Corp".to_string(),
            position: "Developer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            end_date,
            current,
            description: "Building web applications".to_string(),
            achievements: vec![],
            challenges: vec![],
            learnings: vec![],
            technologies: vec!["Rust".to_string()],
            order: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn list_query_orders_by_rank_descending() {
        let sql = ExperienceMapper::ordered(entity::Entity::find())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.ends_with(r#"ORDER BY "experiences"."order" DESC"#),
            "unexpected query: {sql}"
        );
    }

    #[test]
    fn create_with_current_drops_supplied_end_date() {
        let dto: CreateExperienceDto = serde_json::from_str(
            r#"{
                "company": "Tech Corp",
                "position": "Developer",
                "start_date": "2021-01-01",
                "end_date": "2023-06-30",
                "current": true,
                "description": "Building web applications"
            }"#,
        )
        .unwrap();

        let data = CreateExperienceData::from(dto);
        assert!(data.current);
        assert!(data.end_date.is_none());
    }

    #[test]
    fn update_setting_current_clears_stored_end_date() {
        let end = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        let mut model = stored_model(false, Some(end)).into_active_model();

        ExperienceMapper::apply_update(
            &mut model,
            UpdateExperienceData {
                current: Some(true),
                ..Default::default()
            },
        );

        assert!(matches!(model.end_date, ActiveValue::Set(None)));
    }

    #[test]
    fn update_end_date_on_current_position_is_ignored() {
        let mut model = stored_model(true, None).into_active_model();
        let end = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();

        ExperienceMapper::apply_update(
            &mut model,
            UpdateExperienceData {
                end_date: Some(end),
                ..Default::default()
            },
        );

        assert!(matches!(model.end_date, ActiveValue::Set(None)));
    }

    #[test]
    fn update_touches_only_supplied_fields() {
        let mut model = stored_model(false, None).into_active_model();

        ExperienceMapper::apply_update(
            &mut model,
            UpdateExperienceData {
                position: Some("Senior Developer".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(model.position.clone().unwrap(), "Senior Developer");
        // untouched columns stay unchanged so the UPDATE never rewrites them
        assert!(!model.company.is_set());
        assert!(model.updated_at.is_set());
    }
}
