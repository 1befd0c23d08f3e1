//! 栈操作
//!
//! 基于 `Vec` 的 LIFO 容器，只暴露 push/pop/peek/is_empty/len，
//! 不提供随机访问。

/// 后进先出栈（`Vec` 的末尾是栈顶）
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    /// 创建空栈
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// 创建预分配容量的空栈
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// 压栈
    #[inline]
    pub fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    /// 弹栈，空栈返回 `None`
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// 查看栈顶元素，空栈返回 `None`
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== 测试 ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_operations() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push("Element 1 (unten)");
        stack.push("Element 2 (mitte)");
        stack.push("Element 3 (oben)");

        assert_eq!(stack.len(), 3);
        assert!(!stack.is_empty());

        // peek 不改变大小
        assert_eq!(stack.peek(), Some(&"Element 3 (oben)"));
        assert_eq!(stack.len(), 3);

        assert_eq!(stack.pop(), Some("Element 3 (oben)"));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&"Element 2 (mitte)"));

        assert_eq!(stack.pop(), Some("Element 2 (mitte)"));
        assert_eq!(stack.pop(), Some("Element 1 (unten)"));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_empty_stack() {
        let mut stack: Stack<f64> = Stack::default();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut stack = Stack::with_capacity(4);
        assert!(stack.is_empty());
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.len(), 1);
    }
}
