use serde_json::json;

use super::demo::{to_json, Demo};
use super::Topic;
use crate::arrays::{self, Interval};
use crate::complement;
use crate::frequency::{self, duplicates, text};
use crate::grouping;
use crate::modeling::{self, Animal, BankAccount, Database, Flyer, Shape, Swimmer, Worker};
use crate::sets::{self, algebra, numbers};
use crate::strings::{self, matching, palindrome, parsing, transform, Transform};
use crate::systems::{BloomFilter, CoordinateCache, LruCache, PermissionSystem, SocialNetwork, TaggingSystem};
use crate::two_pointer;

/// Every demo, grouped by topic in `Topic::ALL` order.
pub fn registry() -> Vec<Demo> {
    Topic::ALL.into_iter().flat_map(demos_for).collect()
}

pub fn demos_for(topic: Topic) -> Vec<Demo> {
    match topic {
        Topic::Arrays => array_demos(),
        Topic::Hashmaps => hashmap_demos(),
        Topic::Sets => set_demos(),
        Topic::Strings => string_demos(),
        Topic::Systems => system_demos(),
        Topic::Modeling => modeling_demos(),
    }
}

fn array_demos() -> Vec<Demo> {
    use Topic::Arrays as T;
    vec![
        Demo::new("insert_at", T, "[10, 20, 30, 40], 25 at 2", json!([10, 20, 25, 30, 40]), || {
            let mut v = vec![10, 20, 30, 40];
            arrays::editing::insert_at(&mut v, 25, 2)?;
            to_json(v)
        }),
        Demo::new("delete_at", T, "[10, 20, 30, 40], at 1", json!([20, [10, 30, 40]]), || {
            let mut v = vec![10, 20, 30, 40];
            let removed = arrays::editing::delete_at(&mut v, 1)?;
            to_json((removed, v))
        }),
        Demo::new("find_min_max", T, "[3, 7, 2, 9, 1, 5, 8]", json!([1, 9]), || {
            to_json(arrays::scanning::find_min_max(&[3, 7, 2, 9, 1, 5, 8])?)
        }),
        Demo::new("find_missing_number", T, "[1, 2, 4, 5, 6]", json!(3), || {
            to_json(arrays::scanning::find_missing_number(&[1, 2, 4, 5, 6]))
        }),
        Demo::new("is_armstrong", T, "153, 154", json!([true, false]), || {
            to_json((arrays::scanning::is_armstrong(153), arrays::scanning::is_armstrong(154)))
        }),
        Demo::new("second_largest", T, "[3, 7, 2, 9, 1, 5, 8]", json!(8), || {
            to_json(arrays::second_largest(&[3, 7, 2, 9, 1, 5, 8]))
        }),
        Demo::new("kth_largest", T, "[3, 7, 2, 9, 1, 5, 8], k=3", json!(7), || {
            to_json(arrays::kth_largest(&[3, 7, 2, 9, 1, 5, 8], 3)?)
        }),
        Demo::new("kth_largest_heap", T, "[3, 7, 2, 9, 1, 5, 8], k=3", json!(7), || {
            to_json(arrays::kth_largest_heap(&[3, 7, 2, 9, 1, 5, 8], 3)?)
        }),
        Demo::new("max_subarray_sum", T, "[-2, 1, -3, 4, -1, 2, 1, -5, 4]", json!(6), || {
            to_json(arrays::max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4])?)
        }),
        Demo::new("product_except_self", T, "[1, 2, 3, 4]", json!([24, 12, 8, 6]), || {
            to_json(arrays::product_except_self(&[1, 2, 3, 4])?)
        }),
        Demo::new(
            "merge_intervals",
            T,
            "[[1, 3], [2, 6], [8, 10], [15, 18]]",
            json!([{"start": 1, "end": 6}, {"start": 8, "end": 10}, {"start": 15, "end": 18}]),
            || {
                let intervals: Vec<Interval> = [(1, 3), (2, 6), (8, 10), (15, 18)].into_iter().map(Interval::from).collect();
                to_json(arrays::merge_intervals(intervals))
            },
        ),
        Demo::new("two_sum_sorted", T, "[2, 7, 11, 15], 9", json!([0, 1]), || {
            to_json(two_pointer::two_sum_sorted(&[2, 7, 11, 15], 9))
        }),
        Demo::new("three_sum", T, "[-1, 0, 1, 2, -1, -4]", json!([[-1, -1, 2], [-1, 0, 1]]), || {
            to_json(two_pointer::three_sum(&[-1, 0, 1, 2, -1, -4]))
        }),
        Demo::new("move_zeros", T, "[0, 1, 0, 3, 12]", json!([1, 3, 12, 0, 0]), || {
            let mut v = [0, 1, 0, 3, 12];
            two_pointer::move_zeros(&mut v);
            to_json(v)
        }),
        Demo::new("remove_duplicates_sorted", T, "[1, 1, 2, 2, 3]", json!([3, [1, 2, 3]]), || {
            let mut v = [1, 1, 2, 2, 3];
            let len = two_pointer::remove_duplicates_sorted(&mut v[..]);
            to_json((len, &v[..len]))
        }),
        Demo::new("max_area", T, "[1, 8, 6, 2, 5, 4, 8, 3, 7]", json!(49), || {
            to_json(two_pointer::max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7])?)
        }),
        Demo::new("trap_water", T, "[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]", json!(6), || {
            to_json(two_pointer::trap_water(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1])?)
        }),
    ]
}

fn hashmap_demos() -> Vec<Demo> {
    use Topic::Hashmaps as T;
    vec![
        Demo::new("two_sum", T, "[2, 7, 11, 15], 9", json!([0, 1]), || {
            to_json(complement::two_sum(&[2, 7, 11, 15], 9))
        }),
        Demo::new("two_sum_values", T, "[2, 7, 11, 15], 9", json!([2, 7]), || {
            to_json(complement::two_sum_values(&[2, 7, 11, 15], 9))
        }),
        Demo::new("count_pairs", T, "[1, 5, 7, -1], 6", json!(2), || {
            to_json(complement::count_pairs(&[1, 5, 7, -1], 6))
        }),
        Demo::new("count_words", T, "\"the cat and the hat\"", json!([["the", 2], ["cat", 1]]), || {
            let counts = text::count_words("the cat and the hat");
            to_json(counts.most_common(2))
        }),
        Demo::new("top_k_frequent", T, "[1, 1, 1, 2, 2, 3], k=2", json!([1, 2]), || {
            to_json(frequency::top_k_frequent(&[1, 1, 1, 2, 2, 3], 2))
        }),
        Demo::new("find_all_duplicates", T, "[4, 3, 2, 7, 8, 2, 3, 1]", json!([3, 2]), || {
            to_json(duplicates::find_all_duplicates(&[4, 3, 2, 7, 8, 2, 3, 1]))
        }),
        Demo::new("first_unique_char_index", T, "\"loveleetcode\"", json!(2), || {
            to_json(duplicates::first_unique_char_index("loveleetcode"))
        }),
        Demo::new("contains_nearby_duplicate", T, "[1, 0, 1, 1], k=1", json!(true), || {
            to_json(duplicates::contains_nearby_duplicate(&[1, 0, 1, 1], 1))
        }),
        Demo::new(
            "group_anagrams",
            T,
            "[eat, tea, tan, ate, nat, bat]",
            json!([["eat", "tea", "ate"], ["tan", "nat"], ["bat"]]),
            || to_json(grouping::group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"])),
        ),
        Demo::new("group_by_digit_sum", T, "[12, 21, 30, 11, 102, 20]", json!([[12, 21, 30, 102], [11, 20]]), || {
            to_json(grouping::group_by_digit_sum(&[12, 21, 30, 11, 102, 20]))
        }),
        Demo::new(
            "group_by_length",
            T,
            "[a, bb, ccc, dd, e, fff, g]",
            json!([[1, ["a", "e", "g"]], [2, ["bb", "dd"]], [3, ["ccc", "fff"]]]),
            || to_json(grouping::group_by_length(&["a", "bb", "ccc", "dd", "e", "fff", "g"]).into_pairs()),
        ),
        Demo::new(
            "group_shifted_strings",
            T,
            "[abc, bcd, xyz, yza, ace]",
            json!([["abc", "bcd", "xyz", "yza"], ["ace"]]),
            || to_json(grouping::group_shifted_strings(&["abc", "bcd", "xyz", "yza", "ace"])),
        ),
    ]
}

fn set_demos() -> Vec<Demo> {
    use Topic::Sets as T;
    vec![
        Demo::new("intersection", T, "[4, 9, 5] & [9, 4, 9, 8, 4]", json!([4, 9]), || {
            to_json(sets::intersection(&[4, 9, 5], &[9, 4, 9, 8, 4]))
        }),
        Demo::new("intersect_all", T, "[[1, 2, 3], [2, 3, 4], [3, 4, 5]]", json!([3]), || {
            to_json(algebra::intersect_all(&[vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]))
        }),
        Demo::new("detect_changes", T, "[1, 2, 3] -> [2, 3, 4]", json!({"added": [4], "removed": [1]}), || {
            to_json(sets::detect_changes(&[1, 2, 3], &[2, 3, 4]))
        }),
        Demo::new("single_number", T, "[4, 1, 2, 1, 2]", json!(4), || {
            to_json(sets::single_number(&[4, 1, 2, 1, 2]))
        }),
        Demo::new("longest_consecutive", T, "[100, 4, 200, 1, 3, 2]", json!(4), || {
            to_json(sets::longest_consecutive(&[100, 4, 200, 1, 3, 2]))
        }),
        Demo::new("is_happy", T, "19, 2", json!([true, false]), || {
            to_json((sets::is_happy(19), sets::is_happy(2)))
        }),
        Demo::new("find_missing_and_duplicate", T, "[1, 2, 2, 4], n=4", json!([3, 2]), || {
            to_json(algebra::find_missing_and_duplicate(&[1, 2, 2, 4], 4))
        }),
        Demo::new("fibonacci", T, "n=50", json!(12_586_269_025u64), || {
            to_json(numbers::Fibonacci::new().get(50)?)
        }),
        Demo::new("divide_with_remainder", T, "17 / 5", json!([3, 2]), || {
            to_json(numbers::divide_with_remainder(17, 5)?)
        }),
        Demo::new("manhattan_distance", T, "(1, 2) -> (4, 6)", json!(7), || {
            to_json(numbers::manhattan_distance((1, 2), (4, 6)))
        }),
        Demo::new("is_valid_sudoku", T, "classic puzzle", json!(true), || {
            let board = sets::problems::parse_board(&SUDOKU)?;
            to_json(sets::is_valid_sudoku(&board)?)
        }),
    ]
}

const SUDOKU: [&str; 9] = [
    "53..7....",
    "6..195...",
    ".98....6.",
    "8...6...3",
    "4..8.3..1",
    "7...2...6",
    ".6....28.",
    "...419..5",
    "....8..79",
];

fn string_demos() -> Vec<Demo> {
    use Topic::Strings as T;
    vec![
        Demo::new("is_palindrome_alnum", T, "\"A man a plan a canal Panama\"", json!(true), || {
            to_json(two_pointer::is_palindrome_alnum("A man a plan a canal Panama"))
        }),
        Demo::new("longest_palindrome_substring", T, "\"babad\"", json!("bab"), || {
            to_json(palindrome::longest_palindrome_substring("babad"))
        }),
        Demo::new("longest_unique_substring", T, "\"abcabcbb\"", json!([3, "abc"]), || {
            to_json(two_pointer::longest_unique_substring("abcabcbb"))
        }),
        Demo::new("max_occurring_char", T, "\"programming\"", json!(["r", 2]), || {
            to_json(strings::profile::max_occurring_char("programming"))
        }),
        Demo::new("compress", T, "\"aaabbc\"", json!("a3b2c1"), || to_json(transform::compress("aaabbc"))),
        Demo::new("decompress", T, "\"a3b2c\"", json!("aaabbc"), || to_json(transform::decompress("a3b2c")?)),
        Demo::new("reverse_words", T, "\"the sky is blue\"", json!("blue is sky the"), || {
            to_json(transform::reverse_words("the sky is blue"))
        }),
        Demo::new("title_case", T, "\"hello world from rust\"", json!("Hello World From Rust"), || {
            to_json(transform::title_case("hello world from rust"))
        }),
        Demo::new(
            "apply_pipeline",
            T,
            "\"Hello World\" | lower, remove-spaces, remove-duplicates, compress",
            json!("h1e1l1o1w1r1d1"),
            || {
                let steps = [Transform::Lower, Transform::RemoveSpaces, Transform::RemoveDuplicates, Transform::Compress];
                to_json(strings::apply_pipeline("Hello World", &steps))
            },
        ),
        Demo::new("string_to_int", T, "\"   -42\"", json!(-42), || to_json(parsing::string_to_int("   -42"))),
        Demo::new("is_valid_parentheses", T, "\"({[]})\", \"(]\"", json!([true, false]), || {
            to_json((parsing::is_valid_parentheses("({[]})"), parsing::is_valid_parentheses("(]")))
        }),
        Demo::new("zigzag_convert", T, "\"PAYPALISHIRING\", rows=3", json!("PAHNAPLSIIGYIR"), || {
            to_json(parsing::zigzag_convert("PAYPALISHIRING", 3))
        }),
        Demo::new("longest_common_prefix", T, "[flower, flow, flight]", json!("fl"), || {
            to_json(matching::longest_common_prefix(&["flower", "flow", "flight"]))
        }),
        Demo::new("kmp_search", T, "\"ababcabcabababd\", \"ababd\"", json!([10]), || {
            to_json(matching::kmp_search("ababcabcabababd", "ababd"))
        }),
        Demo::new("word_pattern_match", T, "\"abab\", \"redblueredblue\"", json!(true), || {
            to_json(matching::word_pattern_match("abab", "redblueredblue"))
        }),
    ]
}

fn system_demos() -> Vec<Demo> {
    use Topic::Systems as T;
    vec![
        Demo::new("lru_cache", T, "cap 2: put 1, put 2, get 1, put 3", json!({"evicted": 2, "keys": [1, 3]}), || {
            let mut cache = LruCache::new(2);
            cache.put(1, "a");
            cache.put(2, "b");
            cache.get(&1);
            let evicted = cache.put(3, "c");
            let mut keys: Vec<i32> = cache.keys().copied().collect();
            keys.sort_unstable();
            to_json(json!({"evicted": evicted, "keys": keys}))
        }),
        Demo::new("bloom_filter", T, "add apple, banana; query apple", json!(true), || {
            let mut filter = BloomFilter::with_size(100);
            filter.add("apple");
            filter.add("banana");
            to_json(filter.might_contain("apple"))
        }),
        Demo::new("permissions", T, "alice: editor", json!({"can_delete": false, "permissions": ["read", "write"]}), || {
            let mut system = PermissionSystem::new();
            system.assign_role("alice", "editor");
            to_json(json!({
                "can_delete": system.can_perform("alice", "delete"),
                "permissions": system.permissions("alice"),
            }))
        }),
        Demo::new("tagging", T, "python AND tutorial", json!(["post1"]), || {
            let mut tags = TaggingSystem::new();
            tags.add_item("post1", ["python", "tutorial"]);
            tags.add_item("post2", ["python", "advanced"]);
            tags.add_item("post3", ["rust", "tutorial"]);
            to_json(tags.find_by_all_tags(&["python", "tutorial"]))
        }),
        Demo::new("friend_suggestions", T, "alice-bob, bob-carol", json!(["carol"]), || {
            let mut net = SocialNetwork::new();
            net.add_friendship("alice", "bob");
            net.add_friendship("bob", "carol");
            to_json(net.friend_suggestions("alice"))
        }),
        Demo::new("grid_neighbors", T, "(0,0) with (0,1), (1,0)", json!([[[0, 1], "up"], [[1, 0], "right"]]), || {
            let mut grid = CoordinateCache::new();
            grid.set(0, 1, "up");
            grid.set(1, 0, "right");
            to_json(grid.neighbors(0, 0))
        }),
    ]
}

fn modeling_demos() -> Vec<Demo> {
    use Topic::Modeling as T;
    vec![
        Demo::new("bank_account", T, "open 1000, deposit 500, withdraw 200", json!(1300), || {
            let mut account = BankAccount::open("Alice", 1000)?;
            account.deposit(500)?;
            to_json(account.withdraw(200)?)
        }),
        Demo::new("overdraw", T, "open 100, withdraw 150", json!("insufficient funds: requested 150, available 100"), || {
            let mut account = BankAccount::open("Bob", 100)?;
            let err = account.withdraw(150).err().map(|e| e.to_string());
            to_json(err)
        }),
        Demo::new("manager_work", T, "Carol, Engineering", json!("Carol is working and managing the Engineering department"), || {
            let manager = modeling::Manager::new(modeling::Employee::new("Carol", 3, 90_000)?, "Engineering");
            to_json(manager.work())
        }),
        Demo::new("shapes", T, "rectangle 5x3, square 4", json!(["Rectangle: area=15.00, perimeter=16.00", "Square: area=16.00, perimeter=16.00"]), || {
            let shapes: Vec<Box<dyn Shape>> =
                vec![Box::new(modeling::Rectangle::new(5.0, 3.0)?), Box::new(modeling::Square::new(4.0)?)];
            to_json(shapes.iter().map(|s| s.describe()).collect::<Vec<_>>())
        }),
        Demo::new("chorus", T, "dog, cat, cow", json!(["Rex says: Woof!", "Tom says: Meow!", "Daisy says: Moo!"]), || {
            let animals: Vec<Box<dyn Animal>> = vec![
                Box::new(modeling::Dog::new("Rex")),
                Box::new(modeling::Cat::new("Tom")),
                Box::new(modeling::Cow::new("Daisy")),
            ];
            to_json(modeling::chorus(&animals))
        }),
        Demo::new("duck", T, "fly, swim, quack", json!(["Flying in the sky", "Swimming in water", "Quack quack!"]), || {
            let duck = modeling::Duck;
            to_json([duck.fly(), duck.swim(), duck.quack().to_owned()])
        }),
        Demo::new(
            "database_session",
            T,
            "mysql, postgres@localhost: SELECT * FROM users",
            json!([
                "MySQL executing: SELECT * FROM users",
                "[localhost] Executing: SELECT * FROM users",
            ]),
            || {
                let backends: Vec<Box<dyn Database>> =
                    vec![Box::new(modeling::MySql), Box::new(modeling::PostgreSql::new("localhost"))];
                to_json(backends.iter().map(|db| db.execute_query("SELECT * FROM users")).collect::<Vec<_>>())
            },
        ),
        Demo::new("password", T, "secret123", json!([true, false]), || {
            let user = modeling::User::new("alice", "secret123")?;
            to_json((user.verify_password("secret123"), user.verify_password("wrong")))
        }),
    ]
}
