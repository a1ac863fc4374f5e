pub mod a001_payment_request;
