//! Text diagram of the lanes, their widths and the elements.

use core::fmt;

use super::SkipList;

/// Columns per level-0 step.
const CELL: usize = 6;

/// Renders a [`SkipList`] as a lane diagram, created by
/// [`SkipList::display`].
///
/// Lanes are drawn top to bottom. Each lane gets a row of widths and a row of
/// arrows; `o--->` is a link and `x` ends a lane. The last row lists the
/// elements, one per column block.
///
/// ```
/// use skiprank::SkipList;
///
/// let mut list = SkipList::with_params(1, 0.5).unwrap();
/// list.extend([3, 6, 7]);
/// assert_eq!(
///     list.display().to_string(),
///     "  1     1     1   \n\
///      o---> o---> o---> x Level 0\n      \
///      3     6     7     \n"
/// );
/// ```
pub struct SkipListDiagram<'a, T, G> {
    list: &'a SkipList<T, G>,
}

impl<T, G> SkipList<T, G> {
    /// Returns a [`fmt::Display`] adapter drawing the list's lanes.
    pub fn display(&self) -> SkipListDiagram<'_, T, G> {
        SkipListDiagram { list: self }
    }
}

impl<T: fmt::Display, G> fmt::Display for SkipListDiagram<'_, T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.list;
        for level in (0..list.current_level).rev() {
            for link in list.lane(level).filter(|link| link.target.is_some()) {
                let label = link.width.to_string();
                let cols = link.width * CELL;
                // `(cols - 1) / 2 - len / 2` spaces before the label, the rest after.
                let left = ((cols - 1) / 2).saturating_sub(label.len() / 2);
                write!(f, "{:left$}{label:<rest$}", "", rest = cols - left)?;
            }
            writeln!(f)?;

            for link in list.lane(level) {
                if link.target.is_some() {
                    write!(f, "o{}> ", "-".repeat(link.width * CELL - 3))?;
                } else {
                    f.write_str("x ")?;
                }
            }
            writeln!(f, "Level {level}")?;
        }

        write!(f, "{:cols$}", "", cols = CELL)?;
        for element in list {
            // Pad the rendered text; `T`'s own impl may ignore width flags.
            let text = element.to_string();
            write!(f, "{text:<cols$}", cols = CELL)?;
        }
        writeln!(f)
    }
}
