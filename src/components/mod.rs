pub mod create_community_banner;
