pub mod mocking;
