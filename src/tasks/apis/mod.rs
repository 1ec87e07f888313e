pub mod kie;
