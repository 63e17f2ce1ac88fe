//! Relationship Manager — symmetric follower/following maintenance
//!
//! Follow and unfollow each span two account records and finish with
//! two independent writes, followed side first. The store offers no
//! conditional update, so two concurrent follows against the same
//! account can both read the same follower list and one append can be
//! lost. The integration suite pins this as a known limitation.

use crate::store::AccountStore;
use std::sync::Arc;
use tracing::info;
use types::account::Account;
use types::errors::{SocialError, StoreError};
use types::ids::AccountId;

/// Maintains the bidirectional follow graph across account records.
pub struct RelationshipManager {
    store: Arc<dyn AccountStore>,
}

impl RelationshipManager {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Record `follower_id` as a follower of `followed_id`.
    ///
    /// Both records are loaded in full: the follower/following
    /// sequences are read-modified-written, so a projected load would
    /// discard existing entries on save. Fails with `AlreadyFollowing`
    /// before any write if the relationship exists.
    pub async fn follow(
        &self,
        followed_id: AccountId,
        follower_id: AccountId,
    ) -> Result<(), SocialError> {
        if followed_id == follower_id {
            return Err(SocialError::SelfFollow {
                account_id: followed_id,
            });
        }

        let mut followed = self.load(followed_id).await?;
        let mut follower = self.load(follower_id).await?;

        if followed.is_followed_by(&follower_id) {
            return Err(SocialError::AlreadyFollowing {
                followed_id,
                follower_id,
            });
        }

        followed.followers.push(follower.peer_ref());
        follower.followings.push(followed.peer_ref());

        // Followed side lands first; the pair is not atomic.
        self.store.save(&followed).await?;
        self.store.save(&follower).await?;

        info!(%followed_id, %follower_id, "follow recorded");
        Ok(())
    }

    /// Remove the `follower_id` -> `followed_id` relationship.
    ///
    /// Removal is idempotent: absence of a matching entry is not an
    /// error. Both accounts must exist.
    pub async fn unfollow(
        &self,
        followed_id: AccountId,
        follower_id: AccountId,
    ) -> Result<(), SocialError> {
        let mut followed = self.load(followed_id).await?;
        let mut follower = self.load(follower_id).await?;

        followed
            .followers
            .retain(|peer| peer.account_id != follower_id);
        follower
            .followings
            .retain(|peer| peer.account_id != followed_id);

        self.store.save(&followed).await?;
        self.store.save(&follower).await?;

        info!(%followed_id, %follower_id, "unfollow applied");
        Ok(())
    }

    async fn load(&self, id: AccountId) -> Result<Account, SocialError> {
        self.store.fetch(id).await.map_err(|err| match err {
            StoreError::NotFound { account_id } => SocialError::AccountNotFound { account_id },
            other => SocialError::Store(other),
        })
    }
}
