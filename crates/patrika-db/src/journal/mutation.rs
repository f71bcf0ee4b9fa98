use patrika_entity::journal::{
    self, Comment, Heading, LatexSnippets, Model as JournalEntryModel, engagement_score,
};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel, ModelTrait};
use uuid::Uuid;

use crate::util::now;

pub struct Mutation;

pub struct NewJournalEntry {
    pub title: String,
    pub heading: Heading,
    pub font_family: String,
    pub color: String,
    pub body_html: String,
    pub latex_snippets: Vec<String>,
    pub author_id: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub is_draft: bool,
}

/// Author-editable fields. Author identity, engagement data and the approval
/// record are never settable through a patch.
#[derive(Debug, Default)]
pub struct JournalEntryPatch {
    pub title: Option<String>,
    pub heading: Option<Heading>,
    pub font_family: Option<String>,
    pub color: Option<String>,
    pub body_html: Option<String>,
    pub latex_snippets: Option<Vec<String>>,
    pub is_draft: Option<bool>,
}

impl Mutation {
    /// Creates an entry pending moderation. Submitting (`is_draft = false`)
    /// does not publish; an admin must approve first.
    pub async fn create_entry<C: ConnectionTrait>(
        conn: &C,
        new: NewJournalEntry,
    ) -> Result<JournalEntryModel, DbErr> {
        let created_at = now();
        let entry = journal::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(new.title),
            heading: ActiveValue::Set(new.heading),
            font_family: ActiveValue::Set(new.font_family),
            color: ActiveValue::Set(new.color),
            body_html: ActiveValue::Set(new.body_html),
            latex_snippets: ActiveValue::Set(LatexSnippets(new.latex_snippets)),
            author_id: ActiveValue::Set(new.author_id),
            author_name: ActiveValue::Set(new.author_name),
            author_email: ActiveValue::Set(new.author_email),
            is_draft: ActiveValue::Set(new.is_draft),
            approved: ActiveValue::Set(false),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            published_at: ActiveValue::Set(None),
            likes: ActiveValue::Set(Default::default()),
            comments: ActiveValue::Set(Default::default()),
            stickers: ActiveValue::Set(Default::default()),
            engagement_score: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        entry.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to create journal entry");
        })
    }

    /// Applies an author edit. Any edit revokes the approval record: the
    /// entry must pass moderation again before it is publicly visible.
    pub async fn update_entry<C: ConnectionTrait>(
        conn: &C,
        mut entry: JournalEntryModel,
        patch: JournalEntryPatch,
    ) -> Result<JournalEntryModel, DbErr> {
        if let Some(title) = patch.title {
            entry.title = title;
        }
        if let Some(heading) = patch.heading {
            entry.heading = heading;
        }
        if let Some(font_family) = patch.font_family {
            entry.font_family = font_family;
        }
        if let Some(color) = patch.color {
            entry.color = color;
        }
        if let Some(body_html) = patch.body_html {
            entry.body_html = body_html;
        }
        if let Some(latex_snippets) = patch.latex_snippets {
            entry.latex_snippets = LatexSnippets(latex_snippets);
        }
        if let Some(is_draft) = patch.is_draft {
            entry.is_draft = is_draft;
        }

        entry.approved = false;
        entry.approved_by = None;
        entry.approved_at = None;
        entry.published_at = None;

        Self::write_back(conn, entry).await
    }

    /// Moderator approval. Re-approving refreshes the approval timestamps.
    pub async fn approve_entry<C: ConnectionTrait>(
        conn: &C,
        mut entry: JournalEntryModel,
        approver: &str,
    ) -> Result<JournalEntryModel, DbErr> {
        let approved_at = now();
        entry.approved = true;
        entry.approved_by = Some(approver.to_owned());
        entry.approved_at = Some(approved_at);
        entry.published_at = Some(approved_at);

        Self::write_back(conn, entry).await
    }

    /// Likes or unlikes the entry for `user_id`. Returns the updated entry
    /// and whether the user likes it afterwards.
    pub async fn toggle_like<C: ConnectionTrait>(
        conn: &C,
        mut entry: JournalEntryModel,
        user_id: &str,
    ) -> Result<(JournalEntryModel, bool), DbErr> {
        let liked = entry.likes.toggle(user_id);
        let entry = Self::write_back(conn, entry).await?;
        Ok((entry, liked))
    }

    /// Appends a comment. Comments are append-only, there is no edit or
    /// delete of individual comments.
    pub async fn add_comment<C: ConnectionTrait>(
        conn: &C,
        mut entry: JournalEntryModel,
        user_id: String,
        user_name: String,
        user_email: Option<String>,
        text: String,
    ) -> Result<JournalEntryModel, DbErr> {
        entry.comments.push(Comment {
            user_id,
            user_name,
            user_email,
            text,
            created_at: now(),
        });
        Self::write_back(conn, entry).await
    }

    pub async fn add_sticker<C: ConnectionTrait>(
        conn: &C,
        mut entry: JournalEntryModel,
        symbol: &str,
    ) -> Result<JournalEntryModel, DbErr> {
        entry.stickers.bump(symbol);
        Self::write_back(conn, entry).await
    }

    /// Hard delete, no tombstone.
    pub async fn delete_entry<C: ConnectionTrait>(conn: &C, entry: JournalEntryModel) -> Result<(), DbErr> {
        entry.delete(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, "failed to delete journal entry");
        })?;
        Ok(())
    }

    /// Single-document write-back. The engagement score is recomputed here so
    /// it can never be observed stale relative to likes/comments/stickers.
    async fn write_back<C: ConnectionTrait>(
        conn: &C,
        mut entry: JournalEntryModel,
    ) -> Result<JournalEntryModel, DbErr> {
        entry.engagement_score = engagement_score(&entry.likes, &entry.comments, &entry.stickers);
        entry.updated_at = now();

        entry
            .into_active_model()
            .reset_all()
            .update(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, "failed to update journal entry");
            })
    }
}
