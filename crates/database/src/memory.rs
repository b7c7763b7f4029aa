use crate::{DbError, NoteRepository};
use async_trait::async_trait;
use core_types::{NewNote, Note, NotePage};
use tokio::sync::RwLock;

/// An in-process note store with the same contract as [`crate::DbRepository`].
///
/// Ids start at 1 and increase by one per insert, like a `SERIAL` column.
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    notes: Vec<Note>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for MemoryRepository {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note, DbError> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let created = Note {
            id: state.last_id,
            name: note.name.clone(),
            description: note.description.clone(),
            done: note.done,
        };
        state.notes.push(created.clone());
        Ok(created)
    }

    async fn list_notes(&self, page: NotePage) -> Result<Vec<Note>, DbError> {
        let skip = usize::try_from(page.skip).unwrap_or(0);
        let limit = usize::try_from(page.limit).unwrap_or(0);

        let state = self.state.read().await;
        Ok(state.notes.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn find_note(&self, note_id: i32) -> Result<Option<Note>, DbError> {
        let state = self.state.read().await;
        Ok(state.notes.iter().find(|note| note.id == note_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(name: &str) -> NewNote {
        NewNote {
            name: name.to_string(),
            description: format!("{name} description"),
            done: false,
        }
    }

    #[tokio::test]
    async fn ids_increase_with_insertion_order() {
        let repo = MemoryRepository::new();
        let first = repo.create_note(&new_note("first")).await.unwrap();
        let second = repo.create_note(&new_note("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn list_applies_skip_and_limit() {
        let repo = MemoryRepository::new();
        for i in 0..15 {
            repo.create_note(&new_note(&format!("note {i}"))).await.unwrap();
        }

        let page = repo.list_notes(NotePage { skip: 0, limit: 10 }).await.unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id, 1);

        let page = repo.list_notes(NotePage { skip: 10, limit: 10 }).await.unwrap();
        assert_eq!(page.iter().map(|n| n.id).collect::<Vec<_>>(), vec![11, 12, 13, 14, 15]);
    }

    #[tokio::test]
    async fn find_returns_none_for_unknown_id() {
        let repo = MemoryRepository::new();
        let created = repo.create_note(&new_note("only")).await.unwrap();

        assert_eq!(repo.find_note(created.id).await.unwrap(), Some(created));
        assert_eq!(repo.find_note(2).await.unwrap(), None);
    }
}
