use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::bootcamp::entities::Bootcamp;
use crate::entity::bootcamps::{ActiveModel as BootcampActiveModel, Model as BootcampModel};

impl From<BootcampModel> for Bootcamp {
    fn from(model: BootcampModel) -> Self {
        Bootcamp::from(&model)
    }
}

impl From<&BootcampModel> for Bootcamp {
    fn from(model: &BootcampModel) -> Self {
        let careers = serde_json::from_value(model.careers.clone()).unwrap_or_default();
        Bootcamp {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            slug: model.slug.clone(),
            description: model.description.clone(),
            website: model.website.clone(),
            email: model.email.clone(),
            phone: model.phone.clone(),
            address: model.address.clone(),
            latitude: model.latitude,
            longitude: model.longitude,
            city: model.city.clone(),
            state: model.state.clone(),
            zipcode: model.zipcode.clone(),
            careers,
            housing: model.housing,
            job_assistance: model.job_assistance,
            job_guarantee: model.job_guarantee,
            accept_gi: model.accept_gi,
            average_rating: model.average_rating,
            average_cost: model.average_cost,
            photo: model.photo.clone(),
            courses: Vec::new(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub fn to_active_model(bootcamp: &Bootcamp) -> BootcampActiveModel {
    BootcampActiveModel {
        id: Set(bootcamp.id),
        user_id: Set(bootcamp.user_id),
        name: Set(bootcamp.name.clone()),
        slug: Set(bootcamp.slug.clone()),
        description: Set(bootcamp.description.clone()),
        website: Set(bootcamp.website.clone()),
        email: Set(bootcamp.email.clone()),
        phone: Set(bootcamp.phone.clone()),
        address: Set(bootcamp.address.clone()),
        latitude: Set(bootcamp.latitude),
        longitude: Set(bootcamp.longitude),
        city: Set(bootcamp.city.clone()),
        state: Set(bootcamp.state.clone()),
        zipcode: Set(bootcamp.zipcode.clone()),
        careers: Set(serde_json::to_value(&bootcamp.careers).unwrap_or_default()),
        housing: Set(bootcamp.housing),
        job_assistance: Set(bootcamp.job_assistance),
        job_guarantee: Set(bootcamp.job_guarantee),
        accept_gi: Set(bootcamp.accept_gi),
        average_rating: Set(bootcamp.average_rating),
        average_cost: Set(bootcamp.average_cost),
        photo: Set(bootcamp.photo.clone()),
        created_at: Set(bootcamp.created_at.fixed_offset()),
        updated_at: Set(bootcamp.updated_at.fixed_offset()),
    }
}
