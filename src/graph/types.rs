//! GraphQL object types and their conversions from entity models.

use async_graphql::{SimpleObject, ID};

use crate::entity::{audience, chart, insight};

#[derive(SimpleObject, Clone)]
pub struct Audience {
    pub id: ID,
    pub gender: String,
    pub birthcountry: String,
    pub agegroup: String,
    pub dailyhours: i32,
    pub noofpurchases: i32,
}

impl From<audience::Model> for Audience {
    fn from(row: audience::Model) -> Self {
        Self {
            id: ID(row.id.to_string()),
            gender: row.gender,
            birthcountry: row.birth_country,
            agegroup: row.age_group,
            dailyhours: row.daily_hours,
            noofpurchases: row.no_of_purchases,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Chart {
    pub id: ID,
    pub title: String,
    pub xaxistitle: String,
    pub yaxistitle: String,
}

impl From<chart::Model> for Chart {
    fn from(row: chart::Model) -> Self {
        Self {
            id: ID(row.id.to_string()),
            title: row.title,
            xaxistitle: row.x_axis_title,
            yaxistitle: row.y_axis_title,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Insight {
    pub id: ID,
    pub text: String,
}

impl From<insight::Model> for Insight {
    fn from(row: insight::Model) -> Self {
        Self {
            id: ID(row.id.to_string()),
            text: row.text,
        }
    }
}

/// One user's starred assets, hydrated and grouped by type.
#[derive(SimpleObject)]
pub struct UserStarred {
    pub userid: i64,
    pub audience: Vec<Audience>,
    pub chart: Vec<Chart>,
    pub insight: Vec<Insight>,
}
