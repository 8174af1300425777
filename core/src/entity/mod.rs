pub mod bootcamps;
pub mod courses;
pub mod reviews;
pub mod stored_objects;
pub mod users;
