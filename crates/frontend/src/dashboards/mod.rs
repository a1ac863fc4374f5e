pub mod d001_payments;
