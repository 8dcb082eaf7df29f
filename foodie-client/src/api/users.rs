//! User API

use shared::models::{User, UserType, UserTypeUpdate, UserUpdate};
use shared::MessageResponse;

use crate::client::MaybeEnveloped;
use crate::http::HttpClient;
use crate::{ClientResult, FoodieClient};

impl<H: HttpClient> FoodieClient<H> {
    pub async fn get_all_users(&self) -> ClientResult<Vec<User>> {
        self.http
            .get::<MaybeEnveloped<Vec<User>>>("users")
            .await?
            .into_data()
    }

    pub async fn get_user(&self, user_id: i64) -> ClientResult<User> {
        self.http
            .get::<MaybeEnveloped<User>>(&format!("users/{user_id}"))
            .await?
            .into_data()
    }

    pub async fn update_user(&self, user_id: i64, update: &UserUpdate) -> ClientResult<MessageResponse> {
        self.http.put(&format!("users/{user_id}"), update).await
    }

    /// Promote or demote an account
    pub async fn update_user_type(
        &self,
        user_id: i64,
        user_type: UserType,
    ) -> ClientResult<MessageResponse> {
        self.http
            .patch(
                &format!("user/user-status/{user_id}"),
                &UserTypeUpdate { user_type },
            )
            .await
    }
}
