use std::collections::BTreeMap;

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const LIKE_WEIGHT: f64 = 1.0;
pub const COMMENT_WEIGHT: f64 = 2.0;
pub const STICKER_WEIGHT: f64 = 1.5;

#[derive(Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Clone, Copy, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(4))")]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    #[sea_orm(string_value = "h1")]
    H1,
    #[default]
    #[sea_orm(string_value = "h2")]
    H2,
    #[sea_orm(string_value = "h3")]
    H3,
}

/// A single reader comment. Author name and email are snapshots taken when
/// the comment was written, not live references.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user_id: String,
    pub user_name: String,
    pub user_email: Option<String>,
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Comments(pub Vec<Comment>);

impl Comments {
    pub fn push(&mut self, comment: Comment) {
        self.0.push(comment);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Set of user ids that liked an entry. Membership is the source of truth,
/// the like count is derived.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Likes(pub Vec<String>);

impl Likes {
    pub fn contains(&self, user_id: &str) -> bool {
        self.0.iter().any(|id| id == user_id)
    }

    /// Adds the user id if absent, removes it if present. Returns whether the
    /// user likes the entry afterwards.
    pub fn toggle(&mut self, user_id: &str) -> bool {
        if let Some(position) = self.0.iter().position(|id| id == user_id) {
            self.0.remove(position);
            false
        } else {
            self.0.push(user_id.to_owned());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Counted emoji-like reactions, keyed by symbol. Reactions are not
/// attributed to individual users.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Stickers(pub BTreeMap<String, i64>);

impl Stickers {
    pub fn bump(&mut self, symbol: &str) {
        *self.0.entry(symbol.to_owned()).or_insert(0) += 1;
    }

    pub fn total(&self) -> i64 {
        self.0.values().sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LatexSnippets(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "journal_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub heading: Heading,
    pub font_family: String,
    pub color: String,
    pub body_html: String,
    #[sea_orm(column_type = "Json")]
    pub latex_snippets: LatexSnippets,
    /// External subject id of the author, immutable once set.
    pub author_id: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub is_draft: bool,
    pub approved: bool,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTimeWithTimeZone>,
    pub published_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Json")]
    pub likes: Likes,
    #[sea_orm(column_type = "Json")]
    pub comments: Comments,
    #[sea_orm(column_type = "Json")]
    pub stickers: Stickers,
    pub engagement_score: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Derived popularity metric. Pure function of the current engagement data,
/// recomputed at the end of every mutation so it is never stale.
pub fn engagement_score(likes: &Likes, comments: &Comments, stickers: &Stickers) -> f64 {
    likes.len() as f64 * LIKE_WEIGHT
        + comments.len() as f64 * COMMENT_WEIGHT
        + stickers.total() as f64 * STICKER_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_like_twice_restores_membership() {
        let mut likes = Likes::default();
        assert!(likes.toggle("u1"));
        assert!(likes.contains("u1"));
        assert!(!likes.toggle("u1"));
        assert!(likes.is_empty());
    }

    #[test]
    fn sticker_counts_accumulate() {
        let mut stickers = Stickers::default();
        stickers.bump("🔥");
        stickers.bump("🔥");
        stickers.bump("⭐");
        assert_eq!(stickers.0.get("🔥"), Some(&2));
        assert_eq!(stickers.total(), 3);
    }

    #[test]
    fn score_weighs_comments_double_and_stickers_one_and_a_half() {
        let mut likes = Likes::default();
        likes.toggle("u1");
        likes.toggle("u2");
        let mut comments = Comments::default();
        comments.push(Comment {
            user_id: "u1".to_owned(),
            user_name: "A".to_owned(),
            user_email: None,
            text: "hi".to_owned(),
            created_at: chrono::Utc::now().fixed_offset(),
        });
        let mut stickers = Stickers::default();
        stickers.bump("⭐");
        stickers.bump("⭐");

        assert_eq!(engagement_score(&likes, &comments, &stickers), 2.0 + 2.0 + 3.0);
    }

    #[test]
    fn empty_engagement_scores_zero() {
        assert_eq!(
            engagement_score(&Likes::default(), &Comments::default(), &Stickers::default()),
            0.0
        );
    }
}
