use crate::domain::value_objects::UserId;
use crate::ports::user_directory::{
    DuplicatedEmail, Result, User, UserDirectory, UserDraft,
};
use async_trait::async_trait;
use std::sync::Arc;

use super::MemoryDb;

/// UserDirectoryのインメモリ実装
pub struct InMemoryUserDirectory {
    db: Arc<MemoryDb>,
}

impl InMemoryUserDirectory {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn create(&self, draft: UserDraft) -> Result<User> {
        let mut tables = self.db.lock();

        if tables.users.values().any(|u| u.email == draft.email) {
            return Err(Box::new(DuplicatedEmail { email: draft.email }));
        }

        let user = User {
            user_id: UserId::from_i64(tables.next_user_id()),
            name: draft.name,
            email: draft.email,
        };
        tables.users.insert(user.user_id.value(), user.clone());

        Ok(user)
    }

    async fn save(&self, user: User) -> Result<User> {
        let mut tables = self.db.lock();

        // 自分以外が同じメールアドレスを使っていれば一意性違反
        if tables
            .users
            .values()
            .any(|u| u.email == user.email && u.user_id != user.user_id)
        {
            return Err(Box::new(DuplicatedEmail { email: user.email }));
        }

        tables.users.insert(user.user_id.value(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>> {
        let tables = self.db.lock();
        Ok(tables.users.get(&user_id.value()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let tables = self.db.lock();
        Ok(tables.users.values().cloned().collect())
    }

    async fn delete(&self, user_id: UserId) -> Result<()> {
        let mut tables = self.db.lock();
        tables.users.remove(&user_id.value());
        Ok(())
    }
}
