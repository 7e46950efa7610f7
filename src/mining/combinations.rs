/// Visit every `k`-combination of `0..n` in lexicographic order.
///
/// Index-based successor stepping, so stack depth does not grow with `k`.
pub fn for_each_combination<F>(n: usize, k: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n {
        return;
    }

    let mut current: Vec<usize> = (0..k).collect();
    loop {
        callback(&current);

        // rightmost position that can still advance
        let mut i = k;
        while i > 0 && current[i - 1] == n - k + (i - 1) {
            i -= 1;
        }
        if i == 0 {
            return;
        }

        current[i - 1] += 1;
        for j in i..k {
            current[j] = current[j - 1] + 1;
        }
    }
}

/// Split `items` into (`picked`, rest) for every `k`-combination of positions.
pub fn for_each_split<T, F>(items: &[T], k: usize, mut callback: F)
where
    T: Clone,
    F: FnMut(Vec<T>, Vec<T>),
{
    for_each_combination(items.len(), k, |combination| {
        let mut picked = Vec::with_capacity(k);
        let mut rest = Vec::with_capacity(items.len() - k);
        let mut next = combination.iter().peekable();

        for (idx, item) in items.iter().enumerate() {
            if next.peek() == Some(&&idx) {
                next.next();
                picked.push(item.clone());
            } else {
                rest.push(item.clone());
            }
        }
        callback(picked, rest);
    });
}
