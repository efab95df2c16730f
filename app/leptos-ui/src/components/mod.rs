pub mod card;
pub mod skeleton;

pub use card::Card;
pub use skeleton::Skeleton;
