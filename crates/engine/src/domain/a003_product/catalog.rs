use contracts::domain::a003_product::Product;

/// Demo catalog shown by the product list
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Wireless Headphones",
            79.99,
            "High-quality wireless headphones with noise cancellation",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&h=500&fit=crop",
            "Electronics",
            4.5,
        ),
        Product::new(
            2,
            "Smart Watch",
            199.99,
            "Feature-rich smartwatch with fitness tracking",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500&h=500&fit=crop",
            "Electronics",
            4.7,
        ),
        Product::new(
            3,
            "Running Shoes",
            89.99,
            "Comfortable running shoes for all terrains",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500&h=500&fit=crop",
            "Sports",
            4.3,
        ),
        Product::new(
            4,
            "Coffee Maker",
            129.99,
            "Programmable coffee maker with thermal carafe",
            "https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?w=500&h=500&fit=crop",
            "Home",
            4.6,
        ),
        Product::new(
            5,
            "Backpack",
            49.99,
            "Durable backpack with laptop compartment",
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500&h=500&fit=crop",
            "Accessories",
            4.4,
        ),
        Product::new(
            6,
            "Bluetooth Speaker",
            59.99,
            "Portable waterproof Bluetooth speaker",
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500&h=500&fit=crop",
            "Electronics",
            4.8,
        ),
    ]
}
