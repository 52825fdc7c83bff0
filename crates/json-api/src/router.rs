//! App Router

use salvo::Router;

use crate::{appliances, consumptions};

pub(crate) fn app_router() -> Router {
    Router::with_path("api/v1")
        .push(
            Router::with_path("appliances")
                .get(appliances::index::handler)
                .post(appliances::create::handler)
                .push(Router::with_path("id/{id}").get(appliances::get::handler))
                .push(
                    Router::with_path("name")
                        .get(appliances::lookup::handler)
                        .push(Router::with_path("{name}").get(appliances::by_name::handler)),
                )
                .push(
                    Router::with_path("{id}")
                        .put(appliances::update::handler)
                        .delete(appliances::delete::handler),
                ),
        )
        .push(
            Router::with_path("consumptions")
                .get(consumptions::index::handler)
                .post(consumptions::create::handler)
                .push(Router::with_path("id/{name}").get(consumptions::get::handler))
                .push(
                    Router::with_path("{name}")
                        .put(consumptions::update::handler)
                        .delete(consumptions::delete::handler),
                ),
        )
}
