pub mod crud_service;
