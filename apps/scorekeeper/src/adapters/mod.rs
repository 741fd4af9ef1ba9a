pub mod kv_sea;
