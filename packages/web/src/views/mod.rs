mod landing;
pub use landing::Landing;

mod courses;
pub use courses::Courses;

mod course_detail;
pub use course_detail::CourseDetail;

mod course_player;
pub use course_player::CoursePlayer;

mod articles;
pub use articles::Articles;

mod article_detail;
pub use article_detail::ArticleDetail;

mod pricing;
pub use pricing::Pricing;

mod faq;
pub use faq::FaqPage;

mod live;
pub use live::Live;

mod club;
pub use club::ClubPage;

mod block;
pub use block::BlockPage;

mod contact;
pub use contact::Contact;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod certificate;
pub use certificate::CertificatePage;

mod legal;
pub use legal::{Privacy, Terms};

mod not_found;
pub use not_found::NotFound;

pub mod admin;

mod google;
