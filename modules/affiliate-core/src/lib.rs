pub mod feed;
pub mod fixtures;
pub mod mock;
pub mod normalize;
pub mod publish;
pub mod rewrite;
pub mod sources;
pub mod store;

pub use feed::{filter_platform, rank_by_engagement, SocialFeed};
pub use mock::mock_posts;
pub use publish::{PublishReceipt, PublishRequest, Publisher};
pub use rewrite::{build_prompt, Rewriter, DEFAULT_VARIATION_COUNT};
pub use sources::{
    fetch_or_mock, FacebookSource, InstagramSource, PostSource, TikTokSource, PAGE_SIZE,
};
pub use store::PostStore;
