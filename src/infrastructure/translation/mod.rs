pub mod translation_client_reqwest;
