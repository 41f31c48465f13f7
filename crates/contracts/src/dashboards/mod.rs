pub mod d401_revenue_summary;
