pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// File name stem shared by the overlay and image outputs,
/// e.g. `Breadth First Searchmaze-Medium.txt`.
pub fn output_stem(algorithm_name: &str, maze_file_name: &str) -> String {
    format!("{}{}", algorithm_name, maze_file_name)
}
