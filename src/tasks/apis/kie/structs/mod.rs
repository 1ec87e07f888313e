pub mod kie_result;
