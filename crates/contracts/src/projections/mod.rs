pub mod p900_offerings_catalog;
