use crate::domain::auth::{NewRefreshToken, RefreshToken, RefreshTokenRepository};
use crate::domain::journals::{Journal, JournalRepository, Neighbours, NewJournal, UpdateJournal};
use crate::domain::projects::{
    NewProject, Project, ProjectRepository, SavedProject, TagRef, UpdateProject,
};
use crate::domain::tags::{Tag, TagRepository};
use crate::domain::users::{NewUser, UpdateProfile, User, UserRepository};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

fn neighbours_of(mut ids: Vec<i64>, id: i64) -> Neighbours {
    ids.sort_unstable();
    Neighbours {
        previous_id: ids.iter().copied().filter(|&other| other < id).max(),
        next_id: ids.iter().copied().filter(|&other| other > id).min(),
    }
}

#[derive(Clone, Default)]
pub struct MockUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<Option<User>, anyhow::Error> {
        let mut users = self.users.lock().unwrap();
        // mirrors the single-account constraint
        if !users.is_empty() {
            return Ok(None);
        }
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: users.len() as i64 + 1,
            name: new_user.name,
            password_hash: new_user.password_hash,
            bio: None,
            email: None,
            github: None,
            linkedin: None,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(Some(user))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    async fn find_owner(&self) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().min_by_key(|u| u.id).cloned())
    }

    async fn count(&self) -> Result<i64, anyhow::Error> {
        Ok(self.users.lock().unwrap().len() as i64)
    }

    async fn update_profile(
        &self,
        id: i64,
        update: UpdateProfile,
    ) -> Result<Option<User>, anyhow::Error> {
        fn apply(field: &mut Option<String>, value: Option<String>) {
            if let Some(value) = value {
                *field = if value.is_empty() { None } else { Some(value) };
            }
        }

        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            user.name = name;
        }
        apply(&mut user.bio, update.bio);
        apply(&mut user.email, update.email);
        apply(&mut user.github, update.github);
        apply(&mut user.linkedin, update.linkedin);
        user.updated_at = OffsetDateTime::now_utc();
        Ok(Some(user.clone()))
    }
}

#[derive(Clone, Default)]
pub struct MockRefreshTokenRepository {
    pub tokens: Arc<Mutex<Vec<RefreshToken>>>,
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn create(&self, token: NewRefreshToken) -> anyhow::Result<RefreshToken> {
        let mut tokens = self.tokens.lock().unwrap();
        let token = RefreshToken {
            id: tokens.len() as i64 + 1,
            user_id: token.user_id,
            token_hash: token.token_hash,
            expires_at: token.expires_at,
            created_at: OffsetDateTime::now_utc(),
            revoked_at: None,
        };
        tokens.push(token.clone());
        Ok(token)
    }

    async fn find_active_by_hash(&self, token_hash: &str) -> anyhow::Result<Option<RefreshToken>> {
        let now = OffsetDateTime::now_utc();
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens
            .iter()
            .find(|t| t.token_hash == token_hash && t.is_active_at(now))
            .cloned())
    }

    async fn revoke_by_hash(&self, token_hash: &str) -> anyhow::Result<bool> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.iter_mut().find(|t| t.token_hash == token_hash) {
            Some(token) => {
                token.revoked_at.get_or_insert_with(OffsetDateTime::now_utc);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_expired(&self) -> anyhow::Result<u64> {
        let now = OffsetDateTime::now_utc();
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| now < t.expires_at);
        Ok((before - tokens.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub struct MockJournalRepository {
    pub journals: Arc<Mutex<Vec<Journal>>>,
}

#[async_trait]
impl JournalRepository for MockJournalRepository {
    async fn create(&self, new_journal: NewJournal) -> Result<Journal, anyhow::Error> {
        let mut journals = self.journals.lock().unwrap();
        let now = OffsetDateTime::now_utc();
        let journal = Journal {
            id: journals.iter().map(|j| j.id).max().unwrap_or(0) + 1,
            title: new_journal.title,
            content: new_journal.content,
            user_id: new_journal.user_id,
            created_at: now,
            updated_at: now,
        };
        journals.push(journal.clone());
        Ok(journal)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Journal>, anyhow::Error> {
        let journals = self.journals.lock().unwrap();
        Ok(journals.iter().find(|j| j.id == id).cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Journal>, anyhow::Error> {
        let journals = self.journals.lock().unwrap();
        Ok(journals
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, anyhow::Error> {
        Ok(self.journals.lock().unwrap().len() as i64)
    }

    async fn update(&self, id: i64, update: UpdateJournal) -> Result<Option<Journal>, anyhow::Error> {
        let mut journals = self.journals.lock().unwrap();
        Ok(journals.iter_mut().find(|j| j.id == id).map(|journal| {
            journal.title = update.title;
            journal.content = update.content;
            journal.updated_at = OffsetDateTime::now_utc();
            journal.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let mut journals = self.journals.lock().unwrap();
        let before = journals.len();
        journals.retain(|j| j.id != id);
        Ok(journals.len() < before)
    }

    async fn neighbours(&self, id: i64) -> Result<Neighbours, anyhow::Error> {
        let journals = self.journals.lock().unwrap();
        Ok(neighbours_of(journals.iter().map(|j| j.id).collect(), id))
    }
}

/// Projects and tags share one store so links stay consistent.
#[derive(Clone, Default)]
pub struct MockProjectRepository {
    pub projects: Arc<Mutex<Vec<Project>>>,
    pub tags: Arc<Mutex<Vec<Tag>>>,
}

impl MockProjectRepository {
    /// Resolves every reference up front so a bad id changes nothing.
    fn resolve(&self, refs: &[TagRef]) -> Result<Vec<Tag>, anyhow::Error> {
        let mut tags = self.tags.lock().unwrap();
        let mut pending: Vec<String> = Vec::new();
        let mut resolved = Vec::new();
        for tag_ref in refs {
            match tag_ref {
                TagRef::Id(id) => {
                    let tag = tags
                        .iter()
                        .find(|t| t.id == *id)
                        .cloned()
                        .ok_or_else(|| anyhow::anyhow!("no tag with id {id}"))?;
                    resolved.push(tag);
                }
                TagRef::Name(name) => pending.push(name.clone()),
            }
        }
        for name in pending {
            let tag = match tags.iter().find(|t| t.name == name) {
                Some(tag) => tag.clone(),
                None => {
                    let tag = Tag {
                        id: tags.iter().map(|t| t.id).max().unwrap_or(0) + 1,
                        name,
                    };
                    tags.push(tag.clone());
                    tag
                }
            };
            resolved.push(tag);
        }
        resolved.sort_by(|a, b| a.name.cmp(&b.name));
        resolved.dedup_by_key(|t| t.id);
        Ok(resolved)
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn create_with_tags(&self, new_project: NewProject) -> Result<SavedProject, anyhow::Error> {
        let tags = self.resolve(&new_project.tags)?;
        let mut projects = self.projects.lock().unwrap();
        let now = OffsetDateTime::now_utc();
        let project = Project {
            id: projects.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            title: new_project.title,
            description: new_project.description,
            image_url: new_project.image_url,
            link: new_project.link,
            github: new_project.github,
            status: new_project.status,
            user_id: new_project.user_id,
            tags: tags.iter().map(|t| t.name.clone()).collect(),
            created_at: now,
            updated_at: now,
        };
        projects.push(project.clone());
        Ok(SavedProject { project, tags })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, anyhow::Error> {
        let projects = self.projects.lock().unwrap();
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Project>, anyhow::Error> {
        let projects = self.projects.lock().unwrap();
        Ok(projects
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateProject,
    ) -> Result<Option<SavedProject>, anyhow::Error> {
        let new_tags = match &update.tags {
            Some(refs) => Some(self.resolve(refs)?),
            None => None,
        };
        let all_tags = self.tags.lock().unwrap().clone();
        let mut projects = self.projects.lock().unwrap();
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        project.title = update.title;
        project.description = update.description;
        project.image_url = update.image_url;
        project.link = update.link;
        project.github = update.github;
        project.status = update.status;
        project.updated_at = OffsetDateTime::now_utc();
        let tags = match new_tags {
            Some(tags) => {
                project.tags = tags.iter().map(|t| t.name.clone()).collect();
                tags
            }
            None => all_tags
                .into_iter()
                .filter(|t| project.tags.contains(&t.name))
                .collect(),
        };
        Ok(Some(SavedProject {
            project: project.clone(),
            tags,
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }

    async fn neighbours(&self, id: i64) -> Result<Neighbours, anyhow::Error> {
        let projects = self.projects.lock().unwrap();
        Ok(neighbours_of(projects.iter().map(|p| p.id).collect(), id))
    }
}

#[async_trait]
impl TagRepository for MockProjectRepository {
    async fn search(&self, query: &str) -> Result<Vec<Tag>, anyhow::Error> {
        let needle = query.to_lowercase();
        let tags = self.tags.lock().unwrap();
        let mut found: Vec<Tag> = tags
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_of() {
        assert_eq!(
            neighbours_of(vec![5, 1, 3], 3),
            Neighbours {
                previous_id: Some(1),
                next_id: Some(5)
            }
        );
        assert_eq!(neighbours_of(vec![1], 1), Neighbours::default());
    }
}
