mod articles;
mod magazines;

pub use articles::ArticleView;
pub use magazines::MagazineView;
