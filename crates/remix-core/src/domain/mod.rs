pub mod changeset;
pub mod ids;
pub mod mixtape;
pub mod playlist;
pub mod song;
pub mod user;

pub use ids::{PlaylistId, SongId, UserId};
