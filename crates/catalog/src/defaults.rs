//! The built-in starter catalog: 170 mains (56 breakfast, 57 lunch,
//! 57 dinner) and 50 sides per meal type.

use crate::category::Category;
use crate::item::Item;

const BREAKFAST: &[&str] = &[
    "Oatmeal",
    "Pancakes",
    "Avocado Toast",
    "Greek Yogurt",
    "Smoothie Bowl",
    "Scrambled Eggs",
    "French Toast",
    "Breakfast Burrito",
    "Chia Pudding",
    "Omelette",
    "Bagel & Lox",
    "Fruit Salad",
    "Tofu Scramble",
    "Muffins",
    "Waffles",
    "Frittata",
    "Eggs Benedict",
    "Shakshuka",
    "Belgian Waffles",
    "Breakfast Quesadilla",
    "Cottage Cheese & Fruit",
    "Steel Cut Oats",
    "English Muffin Sandwich",
    "Breakfast Potatoes",
    "Quiche Lorraine",
    "Breakfast Pizza",
    "Acai Bowl",
    "Granola Parfait",
    "Corned Beef Hash",
    "Dutch Baby Pancake",
    "Breakfast Fried Rice",
    "Biscuits and Gravy",
    "Breakfast Tacos",
    "Muesli",
    "Buckwheat Crepes",
    "Ricotta Toast",
    "Zucchini Bread",
    "Baked Oatmeal",
    "Hashbrown Casserole",
    "Huevos Rancheros",
    "Breakfast Sliders",
    "Sweet Potato Hash",
    "Scones",
    "Overnight Oats",
    "Breakfast Casserole",
    "Ham & Cheese Croissant",
    "Breakfast Skillet",
    "Potato Latkes",
    "Turkish Eggs",
    "Cinnamon Rolls",
    "Breakfast Sausage Links",
    "Banana Bread",
    "Apple Turnovers",
    "Peanut Butter Toast",
    "Poached Eggs",
    "Breakfast Enchiladas",
];

const LUNCH: &[&str] = &[
    "Quinoa Salad",
    "Chicken Wrap",
    "Tomato Soup",
    "Banh Mi",
    "Cobb Salad",
    "Turkey Sandwich",
    "Hummus Plate",
    "Sushi Rolls",
    "Lentil Soup",
    "Pasta Salad",
    "Tuna Melt",
    "Veggie Burger",
    "BLT Sandwich",
    "Quesadilla",
    "Burrito Bowl",
    "Poke Bowl",
    "Caprese Panini",
    "Falafel Wrap",
    "Chicken Caesar Salad",
    "Egg Salad Sandwich",
    "Greek Salad",
    "Minestrone Soup",
    "Beef Sliders",
    "Gazpacho",
    "Ramen",
    "Chicken Noodle Soup",
    "Steak Salad",
    "Club Sandwich",
    "Lobster Roll",
    "Chicken Salad",
    "Shrimp Po' Boy",
    "Thai Noodle Salad",
    "Buffalo Chicken Salad",
    "Miso Soup & Gyoza",
    "French Dip Sandwich",
    "Ploughman's Lunch",
    "Reuben Sandwich",
    "Italian Sub",
    "Salmon Salad",
    "Pulled Pork Sandwich",
    "Fish and Chips",
    "Niçoise Salad",
    "Taco Salad",
    "Baked Potato",
    "Mediterranean Bowl",
    "Chickpea Salad",
    "Spring Rolls",
    "Chicken Quesadilla",
    "Clam Chowder",
    "Beef Barley Soup",
    "BBQ Chicken Flatbread",
    "Peanut Noodles",
    "Stuffed Pita",
    "Curry Chicken Salad",
    "Waldorf Salad",
    "Tortellini Soup",
    "Teriyaki Bowl",
];

const DINNER: &[&str] = &[
    "Spaghetti",
    "Salmon & Asparagus",
    "Beef Stir Fry",
    "Chicken Curry",
    "Tacos",
    "Lasagna",
    "Roast Chicken",
    "Shepherd's Pie",
    "Stuffed Peppers",
    "Pizza",
    "Steak & Potatoes",
    "Mushroom Risotto",
    "Pad Thai",
    "Fish Tacos",
    "Meatloaf",
    "Eggplant Parm",
    "Shrimp Scampi",
    "Pot Roast",
    "Beef Wellington",
    "Vegetable Lasagna",
    "Chicken Parmesan",
    "Beef Stroganoff",
    "Grilled Salmon",
    "Chicken Alfredo",
    "Beef Tacos",
    "Pork Chops & Apples",
    "Bibimbap",
    "Lamb Chops",
    "BBQ Ribs",
    "Lobster Bisque",
    "Enchiladas",
    "Chicken Pot Pie",
    "Ratatouille",
    "Beef Stew",
    "Paella",
    "Fish Curry",
    "Jambalaya",
    "Chicken Piccata",
    "Swedish Meatballs",
    "Gnocchi",
    "Stuffed Shells",
    "Chicken Teriyaki",
    "Butter Chicken",
    "Falafel Platter",
    "Chili Con Carne",
    "Pork Souvlaki",
    "Roast Beef",
    "Trout Amandine",
    "Moussaka",
    "Turkey Roast",
    "Seafood Pasta",
    "Chicken Marsala",
    "Beef Bourguignon",
    "Spinach & Ricotta Cannelloni",
    "Zucchini Fritters",
    "Moroccan Lamb Tagine",
    "Hunan Beef",
];

const BREAKFAST_SIDES: &[&str] = &[
    "Fresh Fruit Cup",
    "Hash Browns",
    "Toast with Butter",
    "Bacon Strips",
    "Sausage Links",
    "Home Fries",
    "Fresh Berries",
    "Orange Slices",
    "Cantaloupe Wedges",
    "Sliced Banana",
    "Apple Slices",
    "Grapes",
    "Pineapple Chunks",
    "Strawberries",
    "Blueberries",
    "Croissant",
    "English Muffin",
    "Bagel",
    "Cinnamon Roll",
    "Danish Pastry",
    "Scone",
    "Biscuit",
    "Turkey Sausage",
    "Canadian Bacon",
    "Grilled Tomatoes",
    "Sautéed Mushrooms",
    "Cottage Cheese",
    "Yogurt",
    "Granola",
    "Honey Drizzle",
    "Maple Syrup",
    "Fruit Compote",
    "Jam & Jelly",
    "Peanut Butter",
    "Almond Butter",
    "Cream Cheese",
    "Sliced Avocado",
    "Smoked Salmon",
    "Hollandaise Sauce",
    "Hot Cereal",
    "Breakfast Sausage Patties",
    "Tater Tots",
    "Fruit Smoothie",
    "Orange Juice",
    "Mixed Nuts",
    "Chia Seeds",
    "Flax Seeds",
    "Honey Nut Mix",
    "Fresh Melon",
    "Kiwi Slices",
];

const LUNCH_SIDES: &[&str] = &[
    "French Fries",
    "Side Salad",
    "Coleslaw",
    "Potato Chips",
    "Pickle Spear",
    "Onion Rings",
    "Sweet Potato Fries",
    "Fruit Cup",
    "Potato Salad",
    "Macaroni Salad",
    "Chips & Salsa",
    "Tortilla Chips",
    "Carrot Sticks",
    "Celery Sticks",
    "Cherry Tomatoes",
    "Cucumber Slices",
    "Bell Pepper Strips",
    "Hummus & Veggies",
    "Pretzels",
    "Crackers",
    "Bread Roll",
    "Garlic Bread",
    "Breadsticks",
    "Soup Cup",
    "Tomato Soup",
    "Chicken Noodle Soup",
    "Minestrone Soup",
    "Broccoli Soup",
    "Caesar Salad",
    "Greek Salad",
    "Garden Salad",
    "Caprese Salad",
    "Quinoa Salad",
    "Pasta Salad",
    "Corn on the Cob",
    "Baked Beans",
    "Applesauce",
    "Cottage Cheese Cup",
    "Cheese Cubes",
    "Trail Mix",
    "Edamame",
    "Steamed Vegetables",
    "Roasted Vegetables",
    "Fruit Skewers",
    "Wedge Salad",
    "Beet Salad",
    "Asian Slaw",
    "Tabbouleh",
    "Pita Chips",
    "Guacamole",
];

const DINNER_SIDES: &[&str] = &[
    "Mashed Potatoes",
    "Steamed Rice",
    "Garlic Mashed Potatoes",
    "Baked Potato",
    "Roasted Potatoes",
    "Scalloped Potatoes",
    "Rice Pilaf",
    "Fried Rice",
    "Wild Rice",
    "Brown Rice",
    "Jasmine Rice",
    "Basmati Rice",
    "Steamed Broccoli",
    "Roasted Brussels Sprouts",
    "Green Beans",
    "Asparagus",
    "Glazed Carrots",
    "Corn Casserole",
    "Creamed Spinach",
    "Grilled Zucchini",
    "Roasted Cauliflower",
    "Green Bean Casserole",
    "Dinner Rolls",
    "Garlic Bread",
    "Cornbread",
    "Biscuits",
    "Focaccia Bread",
    "Naan Bread",
    "House Salad",
    "Caesar Salad",
    "Wedge Salad",
    "Caprese Salad",
    "Arugula Salad",
    "Spinach Salad",
    "Coleslaw",
    "Potato Wedges",
    "Steak Fries",
    "Mac and Cheese",
    "Risotto",
    "Polenta",
    "Quinoa",
    "Couscous",
    "Orzo",
    "Stuffing",
    "Cranberry Sauce",
    "Gravy",
    "Sautéed Spinach",
    "Grilled Vegetables",
    "Ratatouille",
    "Collard Greens",
];

pub fn default_items() -> Vec<Item> {
    let sections = [
        (Category::Breakfast, BREAKFAST),
        (Category::Lunch, LUNCH),
        (Category::Dinner, DINNER),
        (Category::BreakfastSide, BREAKFAST_SIDES),
        (Category::LunchSide, LUNCH_SIDES),
        (Category::DinnerSide, DINNER_SIDES),
    ];

    let mut items = Vec::with_capacity(sections.iter().map(|(_, names)| names.len()).sum());
    for (category, names) in sections {
        items.extend(names.iter().map(|name| Item::new(*name, category)));
    }
    items
}
