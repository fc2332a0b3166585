//! List membership endpoints: `GET`, `POST` and `DELETE` on `/2/lists/:id/members`.

pub mod request;

pub mod response;
