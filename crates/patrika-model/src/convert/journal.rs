use patrika_entity::journal::{
    Comment as CommentModel, Heading as HeadingModel, Model as JournalEntryModel,
};

use crate::convert::{FromDbModel, IntoDbModel, IntoModel};
use crate::journal::{Comment, Heading, JournalEntry};

impl FromDbModel<HeadingModel> for Heading {
    fn from_db_model(model: HeadingModel) -> Self {
        match model {
            HeadingModel::H1 => Self::H1,
            HeadingModel::H2 => Self::H2,
            HeadingModel::H3 => Self::H3,
        }
    }
}

impl IntoDbModel<HeadingModel> for Heading {
    fn into_db_model(self) -> HeadingModel {
        match self {
            Self::H1 => HeadingModel::H1,
            Self::H2 => HeadingModel::H2,
            Self::H3 => HeadingModel::H3,
        }
    }
}

impl FromDbModel<CommentModel> for Comment {
    fn from_db_model(model: CommentModel) -> Self {
        Self {
            user_id: model.user_id,
            user_name: model.user_name,
            user_email: model.user_email,
            text: model.text,
            created_at: model.created_at,
        }
    }
}

impl FromDbModel<JournalEntryModel> for JournalEntry {
    fn from_db_model(model: JournalEntryModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            heading: model.heading.into_model(),
            font_family: model.font_family,
            color: model.color,
            body_html: model.body_html,
            latex_snippets: model.latex_snippets.0,
            author_id: model.author_id,
            author_name: model.author_name,
            author_email: model.author_email,
            is_draft: model.is_draft,
            approved: model.approved,
            approved_by: model.approved_by,
            approved_at: model.approved_at,
            published_at: model.published_at,
            likes: model.likes.0,
            comments: model.comments.0.into_iter().map(FromDbModel::from_db_model).collect(),
            stickers: model.stickers.0,
            engagement_score: model.engagement_score,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
