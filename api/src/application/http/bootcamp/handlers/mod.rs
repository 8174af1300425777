pub mod create_bootcamp;
pub mod delete_bootcamp;
pub mod get_bootcamp;
pub mod get_bootcamps;
pub mod get_bootcamps_in_radius;
pub mod update_bootcamp;
pub mod upload_bootcamp_photo;
