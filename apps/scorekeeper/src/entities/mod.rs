pub mod kv_records;
