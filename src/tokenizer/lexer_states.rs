// Обработчики состояний конечного автомата

impl Lexer {
    /// Запускает цикл сканирования и возвращает список токенов
    /// либо первую лексическую ошибку
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        while self.context.position < self.input.len() {
            let character = self.input[self.context.position];
            self.context.advance();

            match self.context.state {
                ScanState::Initial => self.process_initial_state(character),
                ScanState::Word => self.process_word_state(character),
                ScanState::String => self.process_string_state(character),
                ScanState::Number => self.process_number_state(character),
                ScanState::Sign => self.process_sign_state(character),
                ScanState::Separator => self.process_separator_state(character),
                ScanState::End => break,
            }
        }

        if let Some(error) = self.context.error.take() {
            return Err(error);
        }

        // Хвост входа всегда закрывается как слово: после последней лексемы
        // цикл не встречает разделитель и не успевает зафиксировать буфер
        self.context.push_token(TokenKind::Word);

        Ok(self.context.tokens.into_tokens())
    }

    /// Начальное состояние: классифицирует первый символ лексемы
    fn process_initial_state(&mut self, character: char) {
        // Непустой буфер здесь означает ошибку в самом автомате
        if !self.context.tokens.buffer_empty() {
            panic!("initial state must be started with empty buffer");
        }

        if SIGN_CHARS.contains(&character) {
            self.context.state = ScanState::Sign;
        } else if SEPARATOR_CHARS.contains(&character) {
            self.context.rewind(1);
            self.context.state = ScanState::Separator;
        } else if character.is_ascii_digit() {
            self.context.rewind(1);
            self.context.state = ScanState::Number;
            self.context.number_state = NumberState::Integer;
        } else if character == STRING_CHAR {
            self.context.state = ScanState::String;
        } else {
            self.context.rewind(1);
            self.context.state = ScanState::Word;
        }
    }

    /// Накопление идентификатора или литерала без кавычек
    fn process_word_state(&mut self, character: char) {
        if SEPARATOR_CHARS.contains(&character) {
            self.context.push_token(TokenKind::Word);
            self.context.rewind(1);
            self.context.state = ScanState::Initial;
        } else if SIGN_CHARS.contains(&character) {
            let position = self.context.position;
            self.context.fail(Error::sign_inside_identifier(position));
        } else {
            self.context.buffer(character);
        }
    }

    /// Накопление строкового литерала в одинарных кавычках
    fn process_string_state(&mut self, character: char) {
        if character == STRING_CHAR {
            self.context.push_token(TokenKind::String);
            self.context.state = ScanState::Initial;
        } else {
            // Внутри литерала разделители и пробелы - обычное содержимое
            self.context.buffer(character);
        }
    }

    /// Накопление числового литерала с учетом подсостояния
    fn process_number_state(&mut self, character: char) {
        match self.context.number_state {
            NumberState::Sign => {
                // Отложенная после знака цифра буферизуется безусловно
                self.context.buffer(character);
                self.context.number_state = NumberState::Integer;
            }
            NumberState::Integer => {
                if character.is_ascii_digit() {
                    self.context.buffer(character);
                } else if character == DECIMAL_SEPARATOR {
                    self.context.buffer(character);
                    self.context.number_state = NumberState::Decimal;
                } else {
                    self.context.push_number_token();
                    // Символ не относится к числу, откат для повторной обработки
                    self.context.rewind(1);
                }
            }
            NumberState::Decimal => {
                if character.is_ascii_digit() {
                    self.context.buffer(character);
                } else if character == DECIMAL_SEPARATOR && !character.is_whitespace() {
                    let position = self.context.position;
                    self.context.fail(Error::duplicate_decimal_separator(position));
                } else {
                    self.context.push_number_token();
                    // Символ не относится к числу, откат для повторной обработки
                    self.context.rewind(1);
                }
            }
            NumberState::None => {
                unreachable!("number state handler entered without number sub-state")
            }
        }
    }

    /// Состояние после ведущего знака: начало числа, самостоятельный
    /// разделитель или ошибка
    fn process_sign_state(&mut self, character: char) {
        if character.is_ascii_digit() {
            // Откат на знак и цифру: обработчик числа буферизует знак первым
            self.context.rewind(2);
            self.context.state = ScanState::Number;
            self.context.number_state = NumberState::Sign;
        } else if SIGN_CHARS.contains(&character) {
            let position = self.context.position;
            self.context.fail(Error::double_sign(position));
        } else if SEPARATOR_CHARS.contains(&character) {
            let position = self.context.position;
            self.context.fail(Error::sign_followed_by_separator(position));
        } else {
            // Знак оказался самостоятельным разделителем
            self.context.rewind(1);
            self.context.state = ScanState::Separator;
        }
    }

    /// Одиночный разделитель; пробельные символы токена не дают
    fn process_separator_state(&mut self, character: char) {
        if !character.is_whitespace() {
            self.context.buffer(character);
            self.context.push_token(TokenKind::Separator);
        }
        self.context.state = ScanState::Initial;
    }
}
