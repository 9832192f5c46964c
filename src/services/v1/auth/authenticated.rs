use crate::errors::Error;
use crate::middlewares::v1::auth::AppEngineUser;
use crate::responses::v1::person::Person;

#[::tracing::instrument(skip(user))]
pub async fn authenticated(user: AppEngineUser) -> Result<Person, Error> {
    let person = user.require()?;

    ::tracing::debug!(person_id = person.id, "Returning authenticated person");

    Ok(person.into())
}
